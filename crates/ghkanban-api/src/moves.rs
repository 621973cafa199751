use async_trait::async_trait;
use serde::Serialize;

use ghkanban_domain::CardPosition;

use crate::client::GithubClient;
use crate::error::ApiResult;
use crate::traits::CardMover;

#[derive(Debug, Serialize)]
struct MoveBody<'a> {
    position: &'a str,
    column_id: u64,
}

pub(crate) fn move_path(card_id: u64) -> String {
    format!("/projects/columns/cards/{card_id}/moves")
}

#[async_trait]
impl CardMover for GithubClient {
    async fn move_card(
        &self,
        card_id: u64,
        column_id: u64,
        position: CardPosition,
    ) -> ApiResult<()> {
        tracing::info!(
            "Moving card {} to column {} ({})",
            card_id,
            column_id,
            position
        );
        let body = MoveBody {
            position: position.as_str(),
            column_id,
        };
        self.rest_post(&move_path(card_id), &body).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_body_shape() {
        let body = MoveBody {
            position: CardPosition::Top.as_str(),
            column_id: 42,
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({ "position": "top", "column_id": 42 })
        );
        assert_eq!(move_path(7), "/projects/columns/cards/7/moves");
    }
}
