use serde::Deserialize;
use tracing::{info, warn};

use crate::commands::Command;
use crate::config::Config;
use crate::helpers::formatter::{filter_and_format, format_detail};
use crate::helpers::help_doc::help_text;
use crate::models::search_query::SearchQuery;
use crate::repositories::yelp_repo::YelpApiRepo;

pub const NO_RESULTS_REPLY: &str = "No eateries matched your search, try loosening the filters.";

/// A chat message as forwarded by the chat gateway.
#[derive(Clone, Deserialize, Debug)]
pub struct IncomingMessage {
    pub author_id: String,
    pub content: String,
}

pub struct Dispatcher {
    yelp_repo: YelpApiRepo,
    command_prefix: String,
    reference_label: String,
    bot_user_id: Option<String>,
}

impl Dispatcher {
    pub fn new(
        yelp_repo: YelpApiRepo,
        config: &Config,
    ) -> Self {
        Self {
            yelp_repo,
            command_prefix: config.command_prefix.to_lowercase(),
            reference_label: config.reference_label.clone(),
            bot_user_id: config.bot_user_id.clone(),
        }
    }

    /// Returns the reply to post, if any.
    ///
    /// Upstream failures are logged and produce no reply.
    pub async fn handle(
        &self,
        message: &IncomingMessage,
    ) -> Option<String> {
        if self.bot_user_id.as_deref() == Some(message.author_id.as_str()) {
            return None;
        }

        let text = message.content.to_lowercase();
        let arguments = text.strip_prefix(&self.command_prefix)?;

        match Command::from_text(arguments) {
            Command::Help => Some(help_text(&self.command_prefix, &self.reference_label)),
            Command::Find(name) => self.find(&name).await,
            Command::Search(query) => self.search(&query).await,
        }
    }

    async fn find(
        &self,
        name: &str,
    ) -> Option<String> {
        info!("Looking up details for: {}", name);
        match self.yelp_repo.lookup_detail(name).await {
            Ok(detail) => Some(format_detail(&detail, &self.reference_label)),
            Err(e) => {
                warn!("Something went wrong looking up {} due to: {}", name, e);
                None
            }
        }
    }

    async fn search(
        &self,
        query: &SearchQuery,
    ) -> Option<String> {
        info!("Searching eateries for: {:?}", query);
        match self.yelp_repo.search_best(query).await {
            Ok(results) => {
                let reply = filter_and_format(&results, query);
                if reply.is_empty() {
                    Some(NO_RESULTS_REPLY.to_string())
                } else {
                    Some(reply)
                }
            }
            Err(e) => {
                warn!("Something went wrong searching eateries due to: {}", e);
                None
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    pub(crate) fn test_config(api_url: &str) -> Config {
        Config {
            environment: "test".to_string(),
            yelp_api_key: "test-key".to_string(),
            yelp_api_url: api_url.to_string(),
            search_location: "1 Washington Sq, San Jose, CA 95192".to_string(),
            reference_label: "SJSU".to_string(),
            command_prefix: "$sjsufood".to_string(),
            bot_user_id: Some("bot".to_string()),
            port: 3000,
        }
    }

    pub(crate) fn dispatcher(api_url: &str) -> Dispatcher {
        let config = test_config(api_url);
        let repo = YelpApiRepo::new(
            &config.yelp_api_url,
            &config.yelp_api_key,
            &config.search_location,
        )
        .unwrap();
        Dispatcher::new(repo, &config)
    }

    fn message(content: &str) -> IncomingMessage {
        IncomingMessage {
            author_id: "user-1".to_string(),
            content: content.to_string(),
        }
    }

    #[tokio::test]
    async fn empty_command_gets_help_without_calling_the_api() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;
        let dispatcher = dispatcher(&server.uri());

        for content in ["$sjsufood", "$SJSUFOOD  ", "$sjsufood help"] {
            let reply = dispatcher.handle(&message(content)).await.unwrap();
            assert!(reply.contains("within a mile of SJSU"), "{content:?}");
        }
    }

    #[tokio::test]
    async fn ignores_other_messages_and_its_own() {
        let dispatcher = dispatcher("http://127.0.0.1:1");
        assert_eq!(dispatcher.handle(&message("hello there")).await, None);

        let own = IncomingMessage {
            author_id: "bot".to_string(),
            content: "$sjsufood help".to_string(),
        };
        assert_eq!(dispatcher.handle(&own).await, None);
    }

    #[tokio::test]
    async fn search_command_filters_and_lists_results() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/businesses/search"))
            .and(query_param("categories", "chinese,noodles"))
            .and(query_param("price", "1,2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "businesses": [
                    {"id": "a", "name": "Noodle Bar", "rating": 4.5, "distance": 100.0},
                    {"id": "b", "name": "Wok Inn", "rating": 3.5, "distance": 200.0},
                    {"id": "c", "name": "Dumpling Time", "rating": 4.0, "distance": 300.0},
                    {"id": "d", "name": "Canton House", "rating": 5.0, "distance": 400.0},
                    {"id": "e", "name": "Late Noodles", "rating": 4.5, "distance": 500.0}
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;
        let dispatcher = dispatcher(&server.uri());

        let reply = dispatcher
            .handle(&message("$sjsufood chinese,noodles n3 r4.0 p2"))
            .await
            .unwrap();

        assert_eq!(
            reply,
            "Name: Noodle Bar\nName: Dumpling Time\nName: Canton House"
        );
    }

    #[tokio::test]
    async fn glued_tags_are_not_sent_as_categories() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/businesses/search"))
            .and(query_param("categories", "sushi"))
            .and(query_param("price", "1,2,3,4"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "businesses": [
                    {"id": "a", "name": "Sushi Maru", "rating": 4.5, "distance": 100.0},
                    {"id": "b", "name": "Roll Call", "rating": 4.0, "distance": 200.0}
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;
        let dispatcher = dispatcher(&server.uri());

        let reply = dispatcher
            .handle(&message("$sjsufood sushi,n1p4"))
            .await
            .unwrap();

        assert_eq!(reply, "Name: Sushi Maru");
    }

    #[tokio::test]
    async fn search_with_no_qualifying_results_says_so() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/businesses/search"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "businesses": [{"id": "a", "name": "Meh", "rating": 2.0, "distance": 10.0}]
            })))
            .mount(&server)
            .await;
        let dispatcher = dispatcher(&server.uri());

        let reply = dispatcher.handle(&message("$sjsufood r4.5")).await;
        assert_eq!(reply.as_deref(), Some(NO_RESULTS_REPLY));
    }

    #[tokio::test]
    async fn find_command_replies_with_detail_report() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/businesses/search"))
            .and(query_param("term", "house of bagels"))
            .and(query_param("limit", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "businesses": [
                    {"id": "hob-1", "name": "House of Bagels", "rating": 4.0, "distance": 1610.0}
                ]
            })))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/businesses/hob-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "name": "House of Bagels",
                "location": {"address1": "505 S 10th St", "city": "San Jose", "state": "CA", "zip_code": "95112"},
                "display_phone": "(408) 555-0100",
                "rating": 4.0,
                "hours": [{"is_open_now": true}]
            })))
            .mount(&server)
            .await;
        let dispatcher = dispatcher(&server.uri());

        let reply = dispatcher
            .handle(&message("$sjsufood find: House of Bagels"))
            .await
            .unwrap();

        assert_eq!(reply.lines().count(), 7);
        assert!(reply.contains("Distance: Around 1.0 mi from SJSU"));
        assert!(reply.ends_with("Open now: Yes"));
    }

    #[tokio::test]
    async fn transport_failure_drops_reply_and_keeps_handling() {
        let dispatcher = dispatcher("http://127.0.0.1:1");

        assert_eq!(dispatcher.handle(&message("$sjsufood pizza")).await, None);
        assert_eq!(dispatcher.handle(&message("$sjsufood find: pizza")).await, None);

        let reply = dispatcher.handle(&message("$sjsufood help")).await;
        assert!(reply.is_some());
    }
}
