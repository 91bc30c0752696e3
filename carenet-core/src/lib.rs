//! Logic lõi cho lớp trình duyệt của hệ thống quản lý hồ sơ chăm sóc:
//! trạng thái tìm kiếm, bản ghi dữ liệu, mô tả request API và phân loại lỗi.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Cấu hình điều chỉnh phân trang và các độ trễ của giao diện.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchConfig {
    /// Số dòng cố định trên một trang kết quả.
    pub page_size: usize,
    /// Số gợi ý tối đa trả về khi gõ tìm kiếm.
    pub suggest_limit: usize,
    /// Thời gian chờ (ms) trước khi gửi request gợi ý.
    pub suggest_debounce_ms: u32,
    /// Thời gian chờ (ms) trước khi ẩn bảng gợi ý sau khi mất focus.
    pub suggest_hide_delay_ms: u32,
    /// Thời gian chờ (ms) trước khi chuyển trang sau khi xóa thành công.
    pub redirect_delay_ms: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            page_size: 20,
            suggest_limit: 10,
            suggest_debounce_ms: 150,
            suggest_hide_delay_ms: 500,
            redirect_delay_ms: 1000,
        }
    }
}

/// Hướng sắp xếp hiện hành của một cột.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    /// Giá trị gửi lên API qua tham số `order`.
    pub fn as_param(self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }

    /// Hướng ngược lại.
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

/// Cặp (cột, hướng) đang áp dụng cho danh sách kết quả.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SortSpec {
    pub by: String,
    pub order: SortDirection,
}

impl Default for SortSpec {
    fn default() -> Self {
        Self {
            by: "id".to_string(),
            order: SortDirection::Asc,
        }
    }
}

/// Trạng thái tìm kiếm của một trang danh sách: bộ lọc, sắp xếp và con trỏ trang.
///
/// Mọi thao tác thay đổi bộ lọc hoặc sắp xếp đều đưa con trỏ trang về 0;
/// con trỏ không bao giờ âm.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SearchState {
    pub filters: BTreeMap<String, String>,
    pub sort: SortSpec,
    pub page: usize,
}

impl SearchState {
    /// Thay toàn bộ bộ lọc bằng các cặp khác rỗng và quay về trang đầu.
    pub fn apply_filters<I, K, V>(&mut self, pairs: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: AsRef<str>,
    {
        self.filters = pairs
            .into_iter()
            .filter_map(|(key, value)| {
                let value = value.as_ref().trim();
                if value.is_empty() {
                    None
                } else {
                    Some((key.into(), value.to_string()))
                }
            })
            .collect();
        self.page = 0;
    }

    /// Đường tìm kiếm đơn giản: từ khóa rỗng xóa bộ lọc, ngược lại
    /// bộ lọc chỉ còn một trường `search`.
    pub fn apply_keyword(&mut self, keyword: &str) {
        let keyword = keyword.trim();
        self.filters.clear();
        if !keyword.is_empty() {
            self.filters
                .insert("search".to_string(), keyword.to_string());
        }
        self.page = 0;
    }

    /// Xóa bộ lọc và quay về trang đầu; giữ nguyên sắp xếp.
    pub fn clear_filters(&mut self) {
        self.filters.clear();
        self.page = 0;
    }

    /// Bấm lại cột đang sắp xếp thì đảo hướng; cột mới thì sắp tăng dần.
    pub fn toggle_sort(&mut self, column: &str) {
        if self.sort.by == column {
            self.sort.order = self.sort.order.toggled();
        } else {
            self.sort.by = column.to_string();
            self.sort.order = SortDirection::Asc;
        }
        self.page = 0;
    }

    /// Nhảy tới trang chỉ định.
    pub fn set_page(&mut self, page: usize) {
        self.page = page;
    }

    /// Sang trang kế tiếp.
    pub fn next_page(&mut self) {
        self.page += 1;
    }

    /// Về trang trước, không đi quá trang 0.
    pub fn prev_page(&mut self) {
        self.page = self.page.saturating_sub(1);
    }

    /// Các cặp tham số truy vấn theo thứ tự cố định:
    /// `skip`, `limit`, `sort_by`, `order` rồi tới các trường lọc.
    pub fn query_pairs(&self, config: &SearchConfig) -> Vec<(String, String)> {
        let mut pairs = vec![
            (
                "skip".to_string(),
                (self.page * config.page_size).to_string(),
            ),
            ("limit".to_string(), config.page_size.to_string()),
            ("sort_by".to_string(), self.sort.by.clone()),
            ("order".to_string(), self.sort.order.as_param().to_string()),
        ];
        for (key, value) in &self.filters {
            pairs.push((key.clone(), value.clone()));
        }
        pairs
    }

    /// Chuỗi truy vấn đã mã hóa phần trăm, chưa kèm dấu `?`.
    pub fn query_string(&self, config: &SearchConfig) -> String {
        encode_pairs(&self.query_pairs(config))
    }
}

fn encode_pairs(pairs: &[(String, String)]) -> String {
    pairs
        .iter()
        .map(|(key, value)| format!("{key}={}", urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Trạng thái phân trang suy ra từ số dòng của trang hiện tại.
///
/// Không có tổng số bản ghi từ máy chủ: trang kế tiếp được coi là tồn tại
/// khi trang hiện tại trả về đủ một trang. Nếu tổng số chia hết cho cỡ
/// trang, nút "sau" sẽ dẫn tới một trang rỗng — chấp nhận được.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    pub page: usize,
    pub has_prev: bool,
    pub has_next: bool,
}

impl PageInfo {
    pub fn from_row_count(page: usize, row_count: usize, page_size: usize) -> Self {
        Self {
            page,
            has_prev: page > 0,
            has_next: row_count == page_size,
        }
    }
}

/// Một dòng trong danh sách người sử dụng dịch vụ.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserSummary {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub name_kana: Option<String>,
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub disability_support_level: Option<u8>,
}

/// Bản ghi thuốc đang dùng của một người sử dụng dịch vụ.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Medication {
    pub id: i64,
    pub user_id: i64,
    pub medication_name: String,
    #[serde(default)]
    pub generic_name: Option<String>,
    #[serde(default)]
    pub dosage: Option<String>,
    #[serde(default)]
    pub frequency: Option<String>,
    #[serde(default)]
    pub timing: Option<String>,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default = "default_true")]
    pub is_current: bool,
    #[serde(default)]
    pub purpose: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub prescribing_doctor_id: Option<i64>,
    #[serde(default)]
    pub prescribing_doctor: Option<PrescribingDoctor>,
}

fn default_true() -> bool {
    true
}

/// Bác sĩ kê đơn.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PrescribingDoctor {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub hospital_name: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Một mục tra cứu thông tin thuốc.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DrugInfo {
    pub name: String,
    #[serde(default)]
    pub generic_name: Option<String>,
    #[serde(default)]
    pub effects: Option<String>,
    #[serde(default)]
    pub side_effects: Option<String>,
    #[serde(default)]
    pub dosage_form: Option<String>,
    #[serde(default)]
    pub manufacturer: Option<String>,
    #[serde(default)]
    pub warnings: Option<String>,
    #[serde(default)]
    pub source: String,
}

/// Nhân viên đang đăng nhập, trả về từ `/api/auth/me`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StaffAccount {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    pub role: String,
}

impl StaffAccount {
    /// Quản trị viên được thấy thêm menu quản lý nhân viên.
    pub fn is_admin(&self) -> bool {
        self.role == "admin"
    }
}

/// Số lượt tư vấn của một tháng.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MonthlyCount {
    pub month: String,
    pub count: u64,
}

/// Số liệu tổng hợp sẵn cho trang bảng điều khiển.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DashboardStats {
    #[serde(default)]
    pub consultation_by_type: BTreeMap<String, u64>,
    #[serde(default)]
    pub plan_status: BTreeMap<String, u64>,
    #[serde(default)]
    pub users_by_age_group: BTreeMap<String, u64>,
    #[serde(default)]
    pub monthly_consultations: Vec<MonthlyCount>,
}

/// Phân loại nút trên sơ đồ mạng lưới hỗ trợ.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    User,
    Service,
    Medical,
    Guardian,
    Staff,
    #[serde(other)]
    Other,
}

/// Thuộc tính hiển thị kèm theo một nút; trường không áp dụng thì bỏ trống.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct NodeAttrs {
    pub age: Option<u32>,
    pub gender: Option<String>,
    pub support_level: Option<u8>,
    pub organization_type: Option<String>,
    pub relationship_type: Option<String>,
    pub contact: Option<String>,
    pub phone: Option<String>,
    pub frequency: Option<String>,
    pub guardian_type: Option<String>,
    pub role: Option<String>,
    pub email: Option<String>,
}

/// Một nút trong dữ liệu mạng lưới trả về từ API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NetworkNode {
    pub id: String,
    pub label: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    #[serde(default)]
    pub data: NodeAttrs,
}

/// Một cạnh nối hai nút theo định danh `from`/`to`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NetworkEdge {
    pub from: String,
    pub to: String,
    #[serde(default)]
    pub relationship: Option<String>,
    #[serde(default)]
    pub frequency: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
}

/// Dữ liệu mạng lưới thô của một người sử dụng dịch vụ.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct NetworkData {
    pub nodes: Vec<NetworkNode>,
    pub edges: Vec<NetworkEdge>,
}

/// Giá trị thu từ một form, mỗi trường một chuỗi; chuỗi rỗng coi như vắng mặt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    values: BTreeMap<String, String>,
}

impl FormValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ghi một trường; giá trị được cắt khoảng trắng hai đầu.
    pub fn insert(&mut self, name: &str, raw: &str) {
        self.values.insert(name.to_string(), raw.trim().to_string());
    }

    /// Giá trị của trường, `None` khi vắng mặt hoặc rỗng.
    pub fn text(&self, name: &str) -> Option<String> {
        self.values
            .get(name)
            .filter(|value| !value.is_empty())
            .cloned()
    }

    /// Trường bắt buộc; rỗng là lỗi.
    pub fn required_text(&self, name: &'static str) -> Result<String, CareError> {
        self.text(name).ok_or(CareError::MissingField(name))
    }

    /// Trường kiểu cờ `"true"`/`"false"`.
    pub fn flag(&self, name: &str, default: bool) -> bool {
        match self.text(name).as_deref() {
            Some("true") => true,
            Some("false") => false,
            _ => default,
        }
    }

    /// Trường số nguyên tùy chọn.
    pub fn integer(&self, name: &str) -> Result<Option<i64>, CareError> {
        match self.text(name) {
            None => Ok(None),
            Some(raw) => raw
                .parse::<i64>()
                .map(Some)
                .map_err(|err| CareError::Parse(format!("Trường {name}: {err}"))),
        }
    }

    /// Trường ngày tháng ISO (`YYYY-MM-DD`) tùy chọn.
    pub fn date(&self, name: &str) -> Result<Option<NaiveDate>, CareError> {
        match self.text(name) {
            None => Ok(None),
            Some(raw) => NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
                .map(Some)
                .map_err(|err| CareError::Parse(format!("Trường {name}: {err}"))),
        }
    }
}

impl<K: AsRef<str>, V: AsRef<str>> FromIterator<(K, V)> for FormValues {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut values = FormValues::new();
        for (key, value) in iter {
            values.insert(key.as_ref(), value.as_ref());
        }
        values
    }
}

/// Nội dung gửi lên khi tạo hoặc cập nhật bản ghi thuốc.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MedicationForm {
    pub user_id: i64,
    pub medication_name: String,
    pub generic_name: Option<String>,
    pub dosage: Option<String>,
    pub frequency: Option<String>,
    pub timing: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub is_current: bool,
    pub purpose: Option<String>,
    pub notes: Option<String>,
    pub prescribing_doctor_id: Option<i64>,
}

impl MedicationForm {
    /// Dựng nội dung từ giá trị form đã thu; tên thuốc là bắt buộc.
    pub fn from_values(user_id: i64, values: &FormValues) -> Result<Self, CareError> {
        Ok(Self {
            user_id,
            medication_name: values.required_text("medication_name")?,
            generic_name: values.text("generic_name"),
            dosage: values.text("dosage"),
            frequency: values.text("frequency"),
            timing: values.text("timing"),
            start_date: values.date("start_date")?,
            end_date: values.date("end_date")?,
            is_current: values.flag("is_current", true),
            purpose: values.text("purpose"),
            notes: values.text("notes"),
            prescribing_doctor_id: values.integer("prescribing_doctor_id")?,
        })
    }
}

/// Nội dung gửi lên khi tạo hoặc cập nhật bác sĩ kê đơn.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DoctorForm {
    pub name: String,
    pub hospital_name: Option<String>,
    pub department: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub notes: Option<String>,
}

impl DoctorForm {
    /// Dựng nội dung từ giá trị form đã thu; tên bác sĩ là bắt buộc.
    pub fn from_values(values: &FormValues) -> Result<Self, CareError> {
        Ok(Self {
            name: values.required_text("name")?,
            hospital_name: values.text("hospital_name"),
            department: values.text("department"),
            phone: values.text("phone"),
            address: values.text("address"),
            notes: values.text("notes"),
        })
    }
}

/// Động từ HTTP dùng với API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

/// Các loại bản ghi có thể xóa qua luồng xác nhận chung.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Users,
    Consultations,
    Plans,
    Monitorings,
    Organizations,
}

impl RecordKind {
    /// Đoạn đường dẫn tương ứng dưới `/api/`.
    pub fn path_segment(self) -> &'static str {
        match self {
            RecordKind::Users => "users",
            RecordKind::Consultations => "consultations",
            RecordKind::Plans => "plans",
            RecordKind::Monitorings => "monitorings",
            RecordKind::Organizations => "organizations",
        }
    }

    /// Tên hiển thị trong hộp thoại xác nhận.
    pub fn display_name(self) -> &'static str {
        match self {
            RecordKind::Users => "hồ sơ người sử dụng dịch vụ",
            RecordKind::Consultations => "bản ghi tư vấn",
            RecordKind::Plans => "kế hoạch hỗ trợ",
            RecordKind::Monitorings => "bản ghi theo dõi",
            RecordKind::Organizations => "tổ chức liên quan",
        }
    }

    /// Tra ngược từ đoạn đường dẫn.
    pub fn from_segment(segment: &str) -> Option<Self> {
        match segment {
            "users" => Some(RecordKind::Users),
            "consultations" => Some(RecordKind::Consultations),
            "plans" => Some(RecordKind::Plans),
            "monitorings" => Some(RecordKind::Monitorings),
            "organizations" => Some(RecordKind::Organizations),
            _ => None,
        }
    }
}

/// Mô tả một request tới API, chưa gắn với cơ chế fetch nào.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    method: Method,
    path: String,
    query: Vec<(String, String)>,
    body: Option<Value>,
}

impl ApiRequest {
    fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    fn with_body(method: Method, path: impl Into<String>, body: Value) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: Some(body),
        }
    }

    /// Tìm kiếm danh sách người sử dụng dịch vụ theo trạng thái hiện hành.
    pub fn user_search(state: &SearchState, config: &SearchConfig) -> Self {
        let mut request = Self::get("/api/users");
        request.query = state.query_pairs(config);
        request
    }

    /// Gợi ý nhanh theo từ khóa, giới hạn số dòng nhỏ.
    pub fn user_suggest(keyword: &str, config: &SearchConfig) -> Self {
        let mut request = Self::get("/api/users");
        request.query = vec![
            ("search".to_string(), keyword.trim().to_string()),
            ("limit".to_string(), config.suggest_limit.to_string()),
        ];
        request
    }

    /// Danh sách thuốc của một người sử dụng dịch vụ.
    pub fn medication_list(user_id: i64) -> Self {
        let mut request = Self::get("/api/medications");
        request.query = vec![("user_id".to_string(), user_id.to_string())];
        request
    }

    /// Một bản ghi thuốc theo định danh.
    pub fn medication_detail(medication_id: i64) -> Self {
        Self::get(format!("/api/medications/{medication_id}"))
    }

    /// Tạo mới hoặc cập nhật bản ghi thuốc tùy theo có định danh hay không.
    pub fn medication_save(
        form: &MedicationForm,
        existing: Option<i64>,
    ) -> Result<Self, CareError> {
        let body = serde_json::to_value(form)
            .map_err(|err| CareError::Parse(format!("Không serialize được form thuốc: {err}")))?;
        Ok(match existing {
            Some(id) => Self::with_body(Method::Put, format!("/api/medications/{id}"), body),
            None => Self::with_body(Method::Post, "/api/medications", body),
        })
    }

    /// Danh sách bác sĩ kê đơn.
    pub fn doctor_list() -> Self {
        Self::get("/api/prescribing-doctors")
    }

    /// Tạo mới hoặc cập nhật bác sĩ kê đơn.
    pub fn doctor_save(form: &DoctorForm, existing: Option<i64>) -> Result<Self, CareError> {
        let body = serde_json::to_value(form)
            .map_err(|err| CareError::Parse(format!("Không serialize được form bác sĩ: {err}")))?;
        Ok(match existing {
            Some(id) => Self::with_body(Method::Put, format!("/api/prescribing-doctors/{id}"), body),
            None => Self::with_body(Method::Post, "/api/prescribing-doctors", body),
        })
    }

    /// Tra cứu thông tin thuốc theo tên.
    pub fn drug_info_search(query: &str) -> Self {
        let mut request = Self::get("/api/drug-info/search");
        request.query = vec![("query".to_string(), query.trim().to_string())];
        request
    }

    /// Dữ liệu mạng lưới của một người sử dụng dịch vụ.
    pub fn user_network(user_id: i64) -> Self {
        Self::get(format!("/api/network/users/{user_id}/network"))
    }

    /// Số liệu tổng hợp cho bảng điều khiển.
    pub fn dashboard_stats() -> Self {
        Self::get("/api/dashboard/stats")
    }

    /// Nhân viên đang đăng nhập.
    pub fn current_staff() -> Self {
        Self::get("/api/auth/me")
    }

    /// Kết thúc phiên làm việc.
    pub fn logout() -> Self {
        Self {
            method: Method::Post,
            path: "/api/auth/logout".to_string(),
            query: Vec::new(),
            body: None,
        }
    }

    /// Xóa một bản ghi theo loại và định danh.
    pub fn delete_record(kind: RecordKind, id: i64) -> Self {
        Self {
            method: Method::Delete,
            path: format!("/api/{}/{id}", kind.path_segment()),
            query: Vec::new(),
            body: None,
        }
    }

    pub fn method(&self) -> Method {
        self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn body(&self) -> Option<&Value> {
        self.body.as_ref()
    }

    /// Đường dẫn đầy đủ kèm chuỗi truy vấn đã mã hóa.
    pub fn url(&self) -> String {
        if self.query.is_empty() {
            self.path.clone()
        } else {
            format!("{}?{}", self.path, encode_pairs(&self.query))
        }
    }
}

/// Lỗi của lớp giao diện: hỏng đường truyền, mã HTTP không thành công,
/// hoặc dữ liệu không đọc được.
#[derive(Debug, thiserror::Error)]
pub enum CareError {
    #[error("Máy chủ trả về mã {status}")]
    Http { status: u16, detail: Option<String> },
    #[error("Không kết nối được máy chủ: {0}")]
    Network(String),
    #[error("Không đọc được dữ liệu: {0}")]
    Parse(String),
    #[error("Thiếu trường bắt buộc: {0}")]
    MissingField(&'static str),
}

impl CareError {
    /// Thông điệp đưa ra cho người dùng: lấy nguyên văn `detail` của máy chủ
    /// nếu có, ngược lại dùng chuỗi dự phòng.
    pub fn surface_message(&self, fallback: &str) -> String {
        match self {
            CareError::Http {
                detail: Some(detail),
                ..
            } => detail.clone(),
            _ => fallback.to_string(),
        }
    }
}
