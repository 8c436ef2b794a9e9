//! GET /api/v1/info - Page text and display settings.

use std::time::Instant;

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use learnix_types::chat::WindowConfig;
use learnix_types::content::PageInfo;

use crate::http::response::ApiResponse;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct InfoResponse {
    pub bot_name: String,
    pub backend: String,
    pub windows: WindowConfig,
    #[serde(flatten)]
    pub page: PageInfo,
}

pub async fn get_info(State(state): State<AppState>) -> Json<ApiResponse<InfoResponse>> {
    let start = Instant::now();
    let data = InfoResponse {
        bot_name: state.bot_name().to_string(),
        backend: state.engine.generator_name().to_string(),
        windows: state.config.windows(),
        page: PageInfo::get(),
    };
    Json(ApiResponse::timed(data, start).with_link("self", "/api/v1/info"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::test_support::echo_state;

    #[tokio::test]
    async fn test_info_carries_page_text() {
        let Json(resp) = get_info(State(echo_state())).await;
        let json = serde_json::to_value(&resp).unwrap();

        assert_eq!(json["data"]["bot_name"], "Learnix");
        assert_eq!(json["data"]["backend"], "echo");
        assert_eq!(json["data"]["title"], "Learnix");
        assert_eq!(json["data"]["help_topics"].as_array().unwrap().len(), 4);
        assert_eq!(json["data"]["windows"]["display_turns"], 6);
    }
}
