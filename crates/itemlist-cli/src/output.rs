use itemlist_domain::Notification;
use serde::Serialize;

#[derive(Serialize)]
pub struct CliResponse<T: Serialize> {
    pub success: bool,
    pub api_version: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub notifications: Vec<Notification>,
}

#[derive(Serialize)]
pub struct ListResponse<T: Serialize> {
    pub items: Vec<T>,
    pub count: usize,
    pub all_selected: bool,
}

pub fn output_success<T: Serialize>(data: T, notifications: Vec<Notification>) {
    let response = CliResponse {
        success: true,
        api_version: env!("CARGO_PKG_VERSION"),
        data: Some(data),
        error: None,
        notifications,
    };
    println!("{}", serde_json::to_string(&response).unwrap());
}

pub fn output_list<T: Serialize>(
    items: Vec<T>,
    all_selected: bool,
    notifications: Vec<Notification>,
) {
    let count = items.len();
    let list = ListResponse {
        items,
        count,
        all_selected,
    };
    output_success(list, notifications);
}

/// Outputs an error response to stderr and terminates the process.
///
/// Exits with code 1 so shell scripts can detect the failure.
pub fn output_error(message: &str, notifications: Vec<Notification>) -> ! {
    let response: CliResponse<()> = CliResponse {
        success: false,
        api_version: env!("CARGO_PKG_VERSION"),
        data: None,
        error: Some(message.to_string()),
        notifications,
    };
    eprintln!("{}", serde_json::to_string(&response).unwrap());
    std::process::exit(1);
}
