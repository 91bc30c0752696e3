use carenet_core::{
    ApiRequest, CareError, DoctorForm, FormValues, MedicationForm, Method, RecordKind,
};
use chrono::NaiveDate;

fn medication_values() -> FormValues {
    FormValues::from_iter(vec![
        ("medication_name", "リスペリドン"),
        ("generic_name", ""),
        ("dosage", "2mg"),
        ("frequency", "1日2回"),
        ("timing", "  朝・夕食後  "),
        ("start_date", "2025-04-01"),
        ("end_date", ""),
        ("is_current", "false"),
        ("purpose", ""),
        ("notes", ""),
        ("prescribing_doctor_id", "7"),
    ])
}

#[test]
fn empty_fields_become_absent_values() {
    let form = MedicationForm::from_values(12, &medication_values())
        .expect("Không dựng được form thuốc");

    assert_eq!(form.user_id, 12);
    assert_eq!(form.medication_name, "リスペリドン");
    assert_eq!(form.generic_name, None);
    assert_eq!(form.timing.as_deref(), Some("朝・夕食後"));
    assert_eq!(form.end_date, None);
    assert!(!form.is_current);
    assert_eq!(form.prescribing_doctor_id, Some(7));
    assert_eq!(
        form.start_date,
        NaiveDate::from_ymd_opt(2025, 4, 1)
    );
}

#[test]
fn absent_fields_serialize_to_null() {
    let form = MedicationForm::from_values(12, &medication_values())
        .expect("Không dựng được form thuốc");
    let body = serde_json::to_value(&form).expect("Không serialize được form");

    assert!(body["generic_name"].is_null());
    assert!(body["end_date"].is_null());
    assert_eq!(body["dosage"], "2mg");
    assert_eq!(body["user_id"], 12);
    assert_eq!(body["start_date"], "2025-04-01");
}

#[test]
fn missing_medication_name_is_rejected() {
    let mut values = medication_values();
    values.insert("medication_name", "   ");

    let err = MedicationForm::from_values(12, &values).unwrap_err();
    assert!(matches!(err, CareError::MissingField("medication_name")));
}

#[test]
fn malformed_date_is_a_parse_error() {
    let mut values = medication_values();
    values.insert("start_date", "01/04/2025");

    let err = MedicationForm::from_values(12, &values).unwrap_err();
    assert!(matches!(err, CareError::Parse(_)));
}

#[test]
fn is_current_defaults_to_true() {
    let values = FormValues::from_iter(vec![("medication_name", "デパケン")]);
    let form = MedicationForm::from_values(3, &values).expect("Không dựng được form thuốc");
    assert!(form.is_current);
}

#[test]
fn doctor_form_requires_only_the_name() {
    let values = FormValues::from_iter(vec![
        ("name", "佐藤一郎"),
        ("hospital_name", ""),
        ("department", "精神科"),
    ]);

    let form = DoctorForm::from_values(&values).expect("Không dựng được form bác sĩ");
    assert_eq!(form.name, "佐藤一郎");
    assert_eq!(form.hospital_name, None);
    assert_eq!(form.department.as_deref(), Some("精神科"));

    let empty = FormValues::new();
    assert!(matches!(
        DoctorForm::from_values(&empty).unwrap_err(),
        CareError::MissingField("name")
    ));
}

#[test]
fn save_request_switches_verb_on_existing_id() {
    let values = medication_values();
    let form = MedicationForm::from_values(12, &values).expect("Không dựng được form thuốc");

    let create = ApiRequest::medication_save(&form, None).expect("Không dựng được request");
    assert_eq!(create.method(), Method::Post);
    assert_eq!(create.url(), "/api/medications");
    assert!(create.body().is_some());

    let update = ApiRequest::medication_save(&form, Some(44)).expect("Không dựng được request");
    assert_eq!(update.method(), Method::Put);
    assert_eq!(update.url(), "/api/medications/44");
}

#[test]
fn delete_request_addresses_the_record_kind() {
    let request = ApiRequest::delete_record(RecordKind::Users, 123);
    assert_eq!(request.method(), Method::Delete);
    assert_eq!(request.url(), "/api/users/123");

    assert_eq!(RecordKind::from_segment("plans"), Some(RecordKind::Plans));
    assert_eq!(RecordKind::from_segment("unknown"), None);
}
