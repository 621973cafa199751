#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as B64;
use base64::Engine;
use ghkanban_api::{ApiResult, CardMover, ProjectQuery, ProjectSource};
use ghkanban_core::{RefreshPolicy, Repository};
use ghkanban_domain::{CardPosition, ProjectTree, RawCard, RawColumn};
use ghkanban_tui::{App, Delivery};
use mockall::mock;

mock! {
    pub Source {}

    #[async_trait]
    impl ProjectSource for Source {
        async fn fetch_project(&self, query: &ProjectQuery) -> ApiResult<ProjectTree>;
    }
}

mock! {
    pub Mover {}

    #[async_trait]
    impl CardMover for Mover {
        async fn move_card(
            &self,
            card_id: u64,
            column_id: u64,
            position: CardPosition,
        ) -> ApiResult<()>;
    }
}

pub fn query() -> ProjectQuery {
    ProjectQuery::new(&Repository::new("octo", "widgets"), "Roadmap")
}

/// Column `n` (from 1) gets node id `ProjectColumn{n}`; its cards get
/// `ProjectCard{n * 100 + row}`.
pub fn tree(columns: &[(&str, &[&str])]) -> ProjectTree {
    ProjectTree {
        name: "Roadmap".to_string(),
        url: "https://github.com/octo/widgets/projects/1".to_string(),
        columns: columns
            .iter()
            .enumerate()
            .map(|(i, (name, titles))| {
                let id = i as u64 + 1;
                RawColumn {
                    node_id: B64.encode(format!("04:ProjectColumn{id}")),
                    name: name.to_string(),
                    cards: titles
                        .iter()
                        .enumerate()
                        .map(|(row, title)| {
                            let card_id = id * 100 + row as u64;
                            RawCard {
                                node_id: B64.encode(format!("011:ProjectCard{card_id}")),
                                title: title.to_string(),
                                body: format!("Body of {title}"),
                                url: format!("https://github.com/octo/widgets/issues/{card_id}"),
                                number: Some(card_id),
                                ..Default::default()
                            }
                        })
                        .collect(),
                }
            })
            .collect(),
    }
}

pub fn app_with(source: MockSource, mover: MockMover) -> App {
    App::new(
        Arc::new(source),
        Arc::new(mover),
        query(),
        RefreshPolicy::DropStale,
    )
}

/// App with a board installed directly as delivery #0. Only for tests that
/// never refresh, since the next issued sequence number is also 0.
pub fn app_showing(columns: &[(&str, &[&str])]) -> App {
    let mut app = app_with(MockSource::new(), MockMover::new());
    app.apply_delivery(Delivery::Fetched {
        seq: 0,
        result: Ok(tree(columns)),
    });
    app
}
