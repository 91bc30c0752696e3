#![cfg(target_arch = "wasm32")]
//! Bảng thuốc của một người sử dụng dịch vụ cùng ba hộp thoại:
//! đăng ký/sửa thuốc, đăng ký bác sĩ kê đơn và tra cứu thông tin thuốc.

use carenet_core::{
    ApiRequest, DoctorForm, DrugInfo, FormValues, Medication, MedicationForm, PrescribingDoctor,
};
use chrono::NaiveDate;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::spawn_local;
use web_sys::{console, FormData, HtmlFormElement, HtmlInputElement};
use yew::events::MouseEvent;
use yew::prelude::*;

use crate::notify::NoticeKind;
use crate::{api, notify, styles};

const MEDICATION_FIELDS: [&str; 11] = [
    "medication_name",
    "generic_name",
    "dosage",
    "frequency",
    "timing",
    "start_date",
    "end_date",
    "is_current",
    "purpose",
    "notes",
    "prescribing_doctor_id",
];

const DOCTOR_FIELDS: [&str; 6] = [
    "name",
    "hospital_name",
    "department",
    "phone",
    "address",
    "notes",
];

/// Đọc các trường đã biết của một form qua `FormData`, như cách trang gốc
/// thu giá trị lúc bấm lưu.
fn collect_form_values(form: &HtmlFormElement, fields: &[&str]) -> FormValues {
    let mut values = FormValues::new();
    if let Ok(data) = FormData::new_with_form(form) {
        for name in fields {
            let raw = data.get(name).as_string().unwrap_or_default();
            values.insert(name, &raw);
        }
    }
    values
}

fn load_medications(user_id: i64, meds: UseStateHandle<Vec<Medication>>) {
    spawn_local(async move {
        match api::fetch_json::<Vec<Medication>>(&ApiRequest::medication_list(user_id)).await {
            Ok(list) => meds.set(list),
            Err(err) => notify::surface_error(&err, "Không tải được danh sách thuốc"),
        }
    });
}

/// Ô nhớ một lần cho danh sách bác sĩ: chỉ tải khi chưa có; lỗi thì không
/// ghi nhớ để lần mở sau thử lại.
fn ensure_doctors(doctors: UseStateHandle<Option<Vec<PrescribingDoctor>>>) {
    if doctors.is_some() {
        return;
    }
    spawn_local(async move {
        match api::fetch_json::<Vec<PrescribingDoctor>>(&ApiRequest::doctor_list()).await {
            Ok(list) => doctors.set(Some(list)),
            Err(err) => console::error_1(&JsValue::from_str(&err.to_string())),
        }
    });
}

#[derive(Properties, PartialEq)]
pub struct MedicationPanelProps {
    pub user_id: i64,
}

#[function_component(MedicationPanel)]
pub fn medication_panel(props: &MedicationPanelProps) -> Html {
    use_effect_with((), |_| {
        if let Some(document) = web_sys::window().and_then(|window| window.document()) {
            if let Err(err) = styles::ensure_styles(&document) {
                console::error_1(&err);
            }
        }
        || ()
    });

    let user_id = props.user_id;
    let meds = use_state(Vec::<Medication>::new);
    let doctors = use_state(|| Option::<Vec<PrescribingDoctor>>::None);
    let med_modal = use_state(|| Option::<Option<Medication>>::None);
    let doctor_modal = use_state(|| false);
    let doctor_preselect = use_state(|| Option::<i64>::None);
    let drug_results = use_state(|| Option::<Vec<DrugInfo>>::None);

    {
        let meds = meds.clone();
        use_effect_with(user_id, move |user_id| {
            load_medications(*user_id, meds);
            || ()
        });
    }

    let on_create = {
        let med_modal = med_modal.clone();
        let doctors = doctors.clone();
        let doctor_preselect = doctor_preselect.clone();
        Callback::from(move |_: MouseEvent| {
            ensure_doctors(doctors.clone());
            doctor_preselect.set(None);
            med_modal.set(Some(None));
        })
    };

    let on_edit = {
        let med_modal = med_modal.clone();
        let doctors = doctors.clone();
        let doctor_preselect = doctor_preselect.clone();
        Callback::from(move |medication_id: i64| {
            ensure_doctors(doctors.clone());
            doctor_preselect.set(None);
            let med_modal = med_modal.clone();
            spawn_local(async move {
                match api::fetch_json::<Medication>(&ApiRequest::medication_detail(medication_id))
                    .await
                {
                    Ok(record) => med_modal.set(Some(Some(record))),
                    Err(err) => notify::surface_error(&err, "Không tải được thông tin thuốc"),
                }
            });
        })
    };

    let on_close_med = {
        let med_modal = med_modal.clone();
        Callback::from(move |_: ()| {
            med_modal.set(None);
        })
    };

    let on_saved_med = {
        let med_modal = med_modal.clone();
        let meds = meds.clone();
        Callback::from(move |_: ()| {
            med_modal.set(None);
            load_medications(user_id, meds.clone());
        })
    };

    let on_open_doctor = {
        let doctor_modal = doctor_modal.clone();
        Callback::from(move |_: ()| {
            doctor_modal.set(true);
        })
    };

    let on_close_doctor = {
        let doctor_modal = doctor_modal.clone();
        Callback::from(move |_: ()| {
            doctor_modal.set(false);
        })
    };

    // Đăng ký bác sĩ thành công: bỏ ô nhớ cũ, tải lại ngay và chọn sẵn
    // bác sĩ vừa tạo trong form thuốc đang mở.
    let on_doctor_saved = {
        let doctors = doctors.clone();
        let doctor_modal = doctor_modal.clone();
        let doctor_preselect = doctor_preselect.clone();
        Callback::from(move |doctor: PrescribingDoctor| {
            doctor_preselect.set(Some(doctor.id));
            doctor_modal.set(false);
            let doctors = doctors.clone();
            spawn_local(async move {
                match api::fetch_json::<Vec<PrescribingDoctor>>(&ApiRequest::doctor_list()).await {
                    Ok(list) => doctors.set(Some(list)),
                    Err(_) => doctors.set(None),
                }
            });
        })
    };

    let on_drug_info = {
        let drug_results = drug_results.clone();
        Callback::from(move |results: Vec<DrugInfo>| {
            drug_results.set(Some(results));
        })
    };

    let on_close_drug = {
        let drug_results = drug_results.clone();
        Callback::from(move |_: ()| {
            drug_results.set(None);
        })
    };

    html! {
        <section class="care-meds">
            <header class="care-meds-header">
                <h3>{"Thuốc đang dùng"}</h3>
                <button type="button" onclick={on_create}>{"Thêm thuốc"}</button>
            </header>
            <table class="care-table">
                <thead>
                    <tr>
                        <th>{"Thuốc"}</th>
                        <th>{"Liều"}</th>
                        <th>{"Số lần"}</th>
                        <th>{"Thời điểm"}</th>
                        <th>{"Giai đoạn"}</th>
                        <th>{"Bác sĩ kê đơn"}</th>
                        <th>{"Trạng thái"}</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    {
                        if meds.is_empty() {
                            html! {
                                <tr>
                                    <td colspan="8" class="care-table-empty">
                                        {"Chưa có bản ghi thuốc."}
                                    </td>
                                </tr>
                            }
                        } else {
                            html! {
                                for meds.iter().map(|med| render_medication_row(med, on_edit.clone()))
                            }
                        }
                    }
                </tbody>
            </table>
            {
                med_modal.as_ref().map(|existing| html! {
                    <MedicationModal
                        user_id={user_id}
                        existing={existing.clone()}
                        doctors={(*doctors).clone().unwrap_or_default()}
                        preselect={*doctor_preselect}
                        on_close={on_close_med.clone()}
                        on_saved={on_saved_med.clone()}
                        on_open_doctor={on_open_doctor.clone()}
                        on_drug_info={on_drug_info.clone()}
                    />
                }).unwrap_or_default()
            }
            {
                if *doctor_modal {
                    html! {
                        <DoctorModal
                            existing={None::<PrescribingDoctor>}
                            on_close={on_close_doctor.clone()}
                            on_saved={on_doctor_saved.clone()}
                        />
                    }
                } else {
                    Html::default()
                }
            }
            {
                drug_results.as_ref().map(|results| html! {
                    <DrugInfoModal results={results.clone()} on_close={on_close_drug.clone()} />
                }).unwrap_or_default()
            }
        </section>
    }
}

fn format_date(date: Option<NaiveDate>) -> String {
    date.map(|value| value.format("%d/%m/%Y").to_string())
        .unwrap_or_else(|| "-".to_string())
}

fn render_medication_row(med: &Medication, on_edit: Callback<i64>) -> Html {
    let medication_id = med.id;
    let onclick = Callback::from(move |_: MouseEvent| {
        on_edit.emit(medication_id);
    });

    let period = match (med.start_date, med.end_date) {
        (None, None) => "-".to_string(),
        (start, end) => format!("{} → {}", format_date(start), format_date(end)),
    };
    let doctor = med
        .prescribing_doctor
        .as_ref()
        .map(|doctor| doctor.name.clone())
        .unwrap_or_else(|| "-".to_string());

    html! {
        <tr>
            <td>
                <strong>{ med.medication_name.clone() }</strong>
                {
                    med.generic_name
                        .as_ref()
                        .map(|name| html! { <small class="care-muted">{ format!("（{name}）") }</small> })
                        .unwrap_or_default()
                }
            </td>
            <td>{ med.dosage.clone().unwrap_or_else(|| "-".to_string()) }</td>
            <td>{ med.frequency.clone().unwrap_or_else(|| "-".to_string()) }</td>
            <td>{ med.timing.clone().unwrap_or_else(|| "-".to_string()) }</td>
            <td>{ period }</td>
            <td>{ doctor }</td>
            <td>
                <span class="care-badge" data-state={if med.is_current { "active" } else { "stopped" }}>
                    { if med.is_current { "Đang dùng" } else { "Đã dừng" } }
                </span>
            </td>
            <td>
                <button type="button" class="care-row-action" onclick={onclick}>{"Sửa"}</button>
            </td>
        </tr>
    }
}

#[derive(Properties, PartialEq)]
struct MedicationModalProps {
    user_id: i64,
    existing: Option<Medication>,
    doctors: Vec<PrescribingDoctor>,
    preselect: Option<i64>,
    on_close: Callback<()>,
    on_saved: Callback<()>,
    on_open_doctor: Callback<()>,
    on_drug_info: Callback<Vec<DrugInfo>>,
}

#[function_component(MedicationModal)]
fn medication_modal(props: &MedicationModalProps) -> Html {
    let form_ref = use_node_ref();
    let name_ref = use_node_ref();

    let existing = props.existing.as_ref();
    let existing_id = existing.map(|med| med.id);
    let is_edit = existing_id.is_some();
    let selected_doctor = props.preselect.or(existing.and_then(|med| med.prescribing_doctor_id));

    let on_save = {
        let form_ref = form_ref.clone();
        let on_saved = props.on_saved.clone();
        let user_id = props.user_id;
        Callback::from(move |_: MouseEvent| {
            let Some(form) = form_ref.cast::<HtmlFormElement>() else {
                return;
            };
            if !form.check_validity() {
                form.report_validity();
                return;
            }

            let values = collect_form_values(&form, &MEDICATION_FIELDS);
            let payload = match MedicationForm::from_values(user_id, &values) {
                Ok(payload) => payload,
                Err(err) => {
                    notify::surface_error(&err, "Dữ liệu nhập không hợp lệ");
                    return;
                }
            };
            let request = match ApiRequest::medication_save(&payload, existing_id) {
                Ok(request) => request,
                Err(err) => {
                    notify::surface_error(&err, "Dữ liệu nhập không hợp lệ");
                    return;
                }
            };

            let on_saved = on_saved.clone();
            spawn_local(async move {
                match api::send(&request).await {
                    Ok(_) => {
                        notify::show_notice(
                            NoticeKind::Success,
                            if existing_id.is_some() {
                                "Đã cập nhật thông tin thuốc"
                            } else {
                                "Đã đăng ký thông tin thuốc"
                            },
                        );
                        on_saved.emit(());
                    }
                    Err(err) => notify::surface_error(&err, "Lưu thông tin thuốc thất bại"),
                }
            });
        })
    };

    let on_drug_lookup = {
        let name_ref = name_ref.clone();
        let on_drug_info = props.on_drug_info.clone();
        Callback::from(move |_: MouseEvent| {
            let query = name_ref
                .cast::<HtmlInputElement>()
                .map(|input| input.value())
                .unwrap_or_default();
            if query.trim().chars().count() < 2 {
                notify::alert("Nhập tên thuốc ít nhất 2 ký tự để tra cứu");
                return;
            }
            let on_drug_info = on_drug_info.clone();
            spawn_local(async move {
                match api::fetch_json::<Vec<DrugInfo>>(&ApiRequest::drug_info_search(&query)).await
                {
                    Ok(results) => on_drug_info.emit(results),
                    Err(err) => notify::surface_error(&err, "Không tra cứu được thông tin thuốc"),
                }
            });
        })
    };

    let on_close = props.on_close.clone();
    let on_close_click = Callback::from(move |_: MouseEvent| on_close.emit(()));
    let on_open_doctor = props.on_open_doctor.clone();
    let on_open_doctor_click = Callback::from(move |event: MouseEvent| {
        event.prevent_default();
        on_open_doctor.emit(());
    });

    let text = |value: Option<&String>| value.cloned().unwrap_or_default();
    let date = |value: Option<NaiveDate>| {
        value.map(|date| date.to_string()).unwrap_or_default()
    };

    html! {
        <div class="care-modal" role="dialog" aria-modal="true">
            <div class="care-modal-dialog care-modal-lg">
                <header class="care-modal-header" data-tone="danger">
                    <h4>{ if is_edit { "Sửa thông tin thuốc" } else { "Đăng ký thuốc" } }</h4>
                    <button
                        type="button"
                        class="care-modal-close"
                        aria-label="Đóng"
                        onclick={on_close_click.clone()}
                    >
                        {"×"}
                    </button>
                </header>
                <div class="care-modal-body">
                    <form ref={form_ref}>
                        <div class="care-field-grid">
                            <label class="care-field care-field-wide">
                                <span>{"Tên thuốc "}<em class="care-required">{"*"}</em></span>
                                <div class="care-field-inline">
                                    <input
                                        ref={name_ref}
                                        type="text"
                                        name="medication_name"
                                        required={true}
                                        value={text(existing.map(|med| &med.medication_name))}
                                    />
                                    <button type="button" onclick={on_drug_lookup}>
                                        {"Tra cứu"}
                                    </button>
                                </div>
                            </label>
                            <label class="care-field">
                                <span>{"Hoạt chất"}</span>
                                <input
                                    type="text"
                                    name="generic_name"
                                    value={text(existing.and_then(|med| med.generic_name.as_ref()))}
                                />
                            </label>
                            <label class="care-field">
                                <span>{"Liều dùng"}</span>
                                <input
                                    type="text"
                                    name="dosage"
                                    placeholder="Ví dụ: 2mg"
                                    value={text(existing.and_then(|med| med.dosage.as_ref()))}
                                />
                            </label>
                            <label class="care-field">
                                <span>{"Số lần uống"}</span>
                                <input
                                    type="text"
                                    name="frequency"
                                    placeholder="Ví dụ: 2 lần mỗi ngày"
                                    value={text(existing.and_then(|med| med.frequency.as_ref()))}
                                />
                            </label>
                            <label class="care-field">
                                <span>{"Thời điểm uống"}</span>
                                <input
                                    type="text"
                                    name="timing"
                                    placeholder="Ví dụ: sau bữa sáng và tối"
                                    value={text(existing.and_then(|med| med.timing.as_ref()))}
                                />
                            </label>
                            <label class="care-field">
                                <span>{"Ngày bắt đầu"}</span>
                                <input
                                    type="date"
                                    name="start_date"
                                    value={date(existing.and_then(|med| med.start_date))}
                                />
                            </label>
                            <label class="care-field">
                                <span>{"Ngày kết thúc"}</span>
                                <input
                                    type="date"
                                    name="end_date"
                                    value={date(existing.and_then(|med| med.end_date))}
                                />
                            </label>
                            <label class="care-field">
                                <span>{"Bác sĩ kê đơn"}</span>
                                <select name="prescribing_doctor_id">
                                    <option value="" selected={selected_doctor.is_none()}>
                                        {"Chưa chọn"}
                                    </option>
                                    {
                                        for props.doctors.iter().map(|doctor| {
                                            let hospital = doctor
                                                .hospital_name
                                                .clone()
                                                .unwrap_or_else(|| "cơ sở chưa rõ".to_string());
                                            html! {
                                                <option
                                                    value={doctor.id.to_string()}
                                                    selected={selected_doctor == Some(doctor.id)}
                                                >
                                                    { format!("{} ({hospital})", doctor.name) }
                                                </option>
                                            }
                                        })
                                    }
                                </select>
                                <small>
                                    <a href="#" onclick={on_open_doctor_click}>
                                        {"Thêm bác sĩ kê đơn mới"}
                                    </a>
                                </small>
                            </label>
                            <label class="care-field">
                                <span>{"Trạng thái"}</span>
                                <select name="is_current">
                                    <option
                                        value="true"
                                        selected={existing.map(|med| med.is_current).unwrap_or(true)}
                                    >
                                        {"Đang dùng"}
                                    </option>
                                    <option
                                        value="false"
                                        selected={existing.map(|med| !med.is_current).unwrap_or(false)}
                                    >
                                        {"Đã dừng"}
                                    </option>
                                </select>
                            </label>
                            <label class="care-field care-field-wide">
                                <span>{"Mục đích kê đơn"}</span>
                                <textarea
                                    name="purpose"
                                    rows="2"
                                    value={text(existing.and_then(|med| med.purpose.as_ref()))}
                                />
                            </label>
                            <label class="care-field care-field-wide">
                                <span>{"Ghi chú"}</span>
                                <textarea
                                    name="notes"
                                    rows="2"
                                    value={text(existing.and_then(|med| med.notes.as_ref()))}
                                />
                            </label>
                        </div>
                    </form>
                </div>
                <footer class="care-modal-footer">
                    <button type="button" class="care-toolbar-secondary" onclick={on_close_click}>
                        {"Hủy"}
                    </button>
                    <button type="button" class="care-primary" onclick={on_save}>
                        {"Lưu"}
                    </button>
                </footer>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct DoctorModalProps {
    existing: Option<PrescribingDoctor>,
    on_close: Callback<()>,
    on_saved: Callback<PrescribingDoctor>,
}

#[function_component(DoctorModal)]
fn doctor_modal(props: &DoctorModalProps) -> Html {
    let form_ref = use_node_ref();
    let existing = props.existing.as_ref();
    let existing_id = existing.map(|doctor| doctor.id);
    let is_edit = existing_id.is_some();

    let on_save = {
        let form_ref = form_ref.clone();
        let on_saved = props.on_saved.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(form) = form_ref.cast::<HtmlFormElement>() else {
                return;
            };
            if !form.check_validity() {
                form.report_validity();
                return;
            }

            let values = collect_form_values(&form, &DOCTOR_FIELDS);
            let payload = match DoctorForm::from_values(&values) {
                Ok(payload) => payload,
                Err(err) => {
                    notify::surface_error(&err, "Dữ liệu nhập không hợp lệ");
                    return;
                }
            };
            let request = match ApiRequest::doctor_save(&payload, existing_id) {
                Ok(request) => request,
                Err(err) => {
                    notify::surface_error(&err, "Dữ liệu nhập không hợp lệ");
                    return;
                }
            };

            let on_saved = on_saved.clone();
            spawn_local(async move {
                match api::fetch_json::<PrescribingDoctor>(&request).await {
                    Ok(doctor) => {
                        notify::show_notice(
                            NoticeKind::Success,
                            if existing_id.is_some() {
                                "Đã cập nhật bác sĩ kê đơn"
                            } else {
                                "Đã đăng ký bác sĩ kê đơn"
                            },
                        );
                        on_saved.emit(doctor);
                    }
                    Err(err) => notify::surface_error(&err, "Lưu bác sĩ kê đơn thất bại"),
                }
            });
        })
    };

    let on_close = props.on_close.clone();
    let on_close_click = Callback::from(move |_: MouseEvent| on_close.emit(()));

    let text = |value: Option<&String>| value.cloned().unwrap_or_default();

    html! {
        <div class="care-modal" role="dialog" aria-modal="true">
            <div class="care-modal-dialog">
                <header class="care-modal-header" data-tone="primary">
                    <h4>{ if is_edit { "Sửa bác sĩ kê đơn" } else { "Đăng ký bác sĩ kê đơn" } }</h4>
                    <button
                        type="button"
                        class="care-modal-close"
                        aria-label="Đóng"
                        onclick={on_close_click.clone()}
                    >
                        {"×"}
                    </button>
                </header>
                <div class="care-modal-body">
                    <form ref={form_ref}>
                        <label class="care-field">
                            <span>{"Tên bác sĩ "}<em class="care-required">{"*"}</em></span>
                            <input
                                type="text"
                                name="name"
                                required={true}
                                value={text(existing.map(|doctor| &doctor.name))}
                            />
                        </label>
                        <label class="care-field">
                            <span>{"Cơ sở y tế"}</span>
                            <input
                                type="text"
                                name="hospital_name"
                                value={text(existing.and_then(|doctor| doctor.hospital_name.as_ref()))}
                            />
                        </label>
                        <label class="care-field">
                            <span>{"Chuyên khoa"}</span>
                            <input
                                type="text"
                                name="department"
                                placeholder="Ví dụ: tâm thần"
                                value={text(existing.and_then(|doctor| doctor.department.as_ref()))}
                            />
                        </label>
                        <label class="care-field">
                            <span>{"Điện thoại"}</span>
                            <input
                                type="tel"
                                name="phone"
                                value={text(existing.and_then(|doctor| doctor.phone.as_ref()))}
                            />
                        </label>
                        <label class="care-field">
                            <span>{"Địa chỉ"}</span>
                            <textarea
                                name="address"
                                rows="2"
                                value={text(existing.and_then(|doctor| doctor.address.as_ref()))}
                            />
                        </label>
                        <label class="care-field">
                            <span>{"Ghi chú"}</span>
                            <textarea
                                name="notes"
                                rows="2"
                                value={text(existing.and_then(|doctor| doctor.notes.as_ref()))}
                            />
                        </label>
                    </form>
                </div>
                <footer class="care-modal-footer">
                    <button type="button" class="care-toolbar-secondary" onclick={on_close_click}>
                        {"Hủy"}
                    </button>
                    <button type="button" class="care-primary" onclick={on_save}>
                        { if is_edit { "Cập nhật" } else { "Đăng ký" } }
                    </button>
                </footer>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct DrugInfoModalProps {
    results: Vec<DrugInfo>,
    on_close: Callback<()>,
}

#[function_component(DrugInfoModal)]
fn drug_info_modal(props: &DrugInfoModalProps) -> Html {
    let on_close = props.on_close.clone();
    let on_close_click = Callback::from(move |_: MouseEvent| on_close.emit(()));

    html! {
        <div class="care-modal" role="dialog" aria-modal="true">
            <div class="care-modal-dialog care-modal-lg care-modal-scroll">
                <header class="care-modal-header" data-tone="info">
                    <h4>{"Thông tin thuốc"}</h4>
                    <button
                        type="button"
                        class="care-modal-close"
                        aria-label="Đóng"
                        onclick={on_close_click.clone()}
                    >
                        {"×"}
                    </button>
                </header>
                <div class="care-modal-body">
                    <p class="care-disclaimer">
                        {"Thông tin chỉ mang tính tham khảo. Luôn làm theo chỉ dẫn của bác sĩ và dược sĩ."}
                    </p>
                    {
                        if props.results.is_empty() {
                            html! {
                                <p class="care-muted">{"Không tìm thấy thông tin thuốc phù hợp."}</p>
                            }
                        } else {
                            html! { for props.results.iter().enumerate().map(|(index, drug)| render_drug_card(index, drug)) }
                        }
                    }
                </div>
                <footer class="care-modal-footer">
                    <button type="button" class="care-toolbar-secondary" onclick={on_close_click}>
                        {"Đóng"}
                    </button>
                </footer>
            </div>
        </div>
    }
}

fn render_drug_card(index: usize, drug: &DrugInfo) -> Html {
    let section = |label: &str, value: Option<&String>| -> Html {
        value
            .map(|text| {
                html! {
                    <div class="care-drug-section">
                        <strong>{ label.to_string() }</strong>
                        <p>{ text.clone() }</p>
                    </div>
                }
            })
            .unwrap_or_default()
    };

    html! {
        <article class={classes!("care-drug-card", (index == 0).then_some("is-best"))}>
            <header>
                <strong>{ drug.name.clone() }</strong>
                {
                    drug.generic_name
                        .as_ref()
                        .map(|name| html! { <span class="care-badge">{ name.clone() }</span> })
                        .unwrap_or_default()
                }
            </header>
            { section("Công dụng", drug.effects.as_ref()) }
            { section("Tác dụng phụ", drug.side_effects.as_ref()) }
            { section("Dạng bào chế", drug.dosage_form.as_ref()) }
            { section("Nhà sản xuất", drug.manufacturer.as_ref()) }
            {
                drug.warnings
                    .as_ref()
                    .map(|warnings| html! {
                        <div class="care-drug-warning">
                            <strong>{"Lưu ý"}</strong>
                            <p>{ warnings.clone() }</p>
                        </div>
                    })
                    .unwrap_or_default()
            }
            <footer class="care-muted">
                { format!("Nguồn: {}", if drug.source.is_empty() { "không rõ" } else { drug.source.as_str() }) }
            </footer>
        </article>
    }
}
