// Firestore implementation of the EventsStore port.
//
// Purpose
// - Reach the managed Events collection over the Firestore REST v1 surface.
//
// Responsibilities
// - Map between `Event` and Firestore's typed field encoding (stringValue,
//   integerValue-as-string).
// - Translate transport failures and non-success responses into StoreError.
// - Resolve deletes by querying for every document matching all three fields
//   and removing each match.

use reqwest::{Client, Method, RequestBuilder, Response};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::config::Config;
use crate::modules::events::core::event::Event;
use crate::modules::events::ports::{EventsStore, StoreError};

/// Name of the collection holding event documents.
const EVENTS_COLLECTION: &str = "Events";

pub struct FirestoreEvents {
    client: Client,
    host: String,
    documents_url: String,
    access_token: Option<String>,
}

impl FirestoreEvents {
    pub fn new(client: Client, config: &Config) -> Self {
        let documents_url = format!(
            "{}/v1/projects/{}/databases/(default)/documents",
            config.firestore_host, config.google_cloud_project
        );
        Self {
            client,
            host: config.firestore_host.clone(),
            documents_url,
            access_token: config.firestore_access_token.clone(),
        }
    }

    fn request(&self, method: Method, url: String) -> RequestBuilder {
        let builder = self.client.request(method, url);
        match &self.access_token {
            Some(token) => builder.header("Authorization", format!("Bearer {token}")),
            None => builder,
        }
    }

    /// Resolve the resource names of every document matching all three
    /// fields of `event`.
    async fn find_matching(&self, event: &Event) -> Result<Vec<String>, StoreError> {
        let body = json!({
            "structuredQuery": {
                "from": [{ "collectionId": EVENTS_COLLECTION }],
                "where": {
                    "compositeFilter": {
                        "op": "AND",
                        "filters": [
                            field_equals("title", json!({ "stringValue": event.title })),
                            field_equals("description", json!({ "stringValue": event.description })),
                            field_equals("id", json!({ "integerValue": event.id.to_string() })),
                        ]
                    }
                }
            }
        });

        let response = self
            .request(Method::POST, format!("{}:runQuery", self.documents_url))
            .json(&body)
            .send()
            .await
            .map_err(transport_error)?;
        let response = check_status(response).await?;
        let results: Vec<RunQueryResult> = response
            .json()
            .await
            .map_err(|err| StoreError::Malformed(err.to_string()))?;

        // The stream ends with a result carrying no document.
        Ok(results
            .into_iter()
            .filter_map(|result| result.document.map(|doc| doc.name))
            .collect())
    }
}

#[async_trait::async_trait]
impl EventsStore for FirestoreEvents {
    async fn list(&self) -> Result<Vec<Event>, StoreError> {
        let url = format!("{}/{}", self.documents_url, EVENTS_COLLECTION);
        let response = self
            .request(Method::GET, url)
            .send()
            .await
            .map_err(transport_error)?;
        let response = check_status(response).await?;
        let body: ListDocumentsResponse = response
            .json()
            .await
            .map_err(|err| StoreError::Malformed(err.to_string()))?;
        body.documents
            .into_iter()
            .map(|document| to_event(document.fields))
            .collect()
    }

    async fn add(&self, event: &Event) -> Result<(), StoreError> {
        let url = format!("{}/{}", self.documents_url, EVENTS_COLLECTION);
        let body = CreateDocumentBody {
            fields: to_fields(event),
        };
        let response = self
            .request(Method::POST, url)
            .json(&body)
            .send()
            .await
            .map_err(transport_error)?;
        check_status(response).await?;
        Ok(())
    }

    async fn delete(&self, event: &Event) -> Result<(), StoreError> {
        for name in self.find_matching(event).await? {
            let url = format!("{}/v1/{name}", self.host);
            let response = self
                .request(Method::DELETE, url)
                .send()
                .await
                .map_err(transport_error)?;
            check_status(response).await?;
        }
        Ok(())
    }
}

fn transport_error(err: reqwest::Error) -> StoreError {
    if err.is_timeout() || err.is_connect() {
        StoreError::Unreachable(err.to_string())
    } else {
        StoreError::Backend(err.to_string())
    }
}

async fn check_status(response: Response) -> Result<Response, StoreError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "could not read error response".to_string());
    Err(StoreError::Backend(format!("HTTP {status} - {body}")))
}

// Firestore's typed value encoding. Integers travel as decimal strings.

#[derive(Debug, Deserialize)]
struct ListDocumentsResponse {
    #[serde(default)]
    documents: Vec<Document>,
}

#[derive(Debug, Deserialize)]
struct Document {
    fields: EventFields,
}

#[derive(Debug, Serialize)]
struct CreateDocumentBody {
    fields: EventFields,
}

#[derive(Debug, Serialize, Deserialize)]
struct EventFields {
    title: StringValue,
    description: StringValue,
    id: IntegerValue,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StringValue {
    string_value: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct IntegerValue {
    integer_value: String,
}

#[derive(Debug, Deserialize)]
struct RunQueryResult {
    document: Option<NamedDocument>,
}

#[derive(Debug, Deserialize)]
struct NamedDocument {
    name: String,
}

fn field_equals(path: &str, value: serde_json::Value) -> serde_json::Value {
    json!({
        "fieldFilter": {
            "field": { "fieldPath": path },
            "op": "EQUAL",
            "value": value,
        }
    })
}

fn to_fields(event: &Event) -> EventFields {
    EventFields {
        title: StringValue {
            string_value: event.title.clone(),
        },
        description: StringValue {
            string_value: event.description.clone(),
        },
        id: IntegerValue {
            integer_value: event.id.to_string(),
        },
    }
}

fn to_event(fields: EventFields) -> Result<Event, StoreError> {
    let id = fields
        .id
        .integer_value
        .parse::<i64>()
        .map_err(|_| StoreError::Malformed(format!("non-integer id: {}", fields.id.integer_value)))?;
    Ok(Event {
        title: fields.title.string_value,
        id,
        description: fields.description.string_value,
    })
}

#[cfg(test)]
mod firestore_mapping_tests {
    use super::*;

    #[test]
    fn it_should_encode_an_event_into_typed_fields() {
        let event = Event {
            title: "Standup".to_string(),
            id: 2,
            description: "Daily sync".to_string(),
        };
        let json = serde_json::to_value(to_fields(&event)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "title": { "stringValue": "Standup" },
                "description": { "stringValue": "Daily sync" },
                "id": { "integerValue": "2" },
            })
        );
    }

    #[test]
    fn it_should_decode_a_listed_document() {
        let raw = r#"{
            "documents": [{
                "name": "projects/p/databases/(default)/documents/Events/abc",
                "fields": {
                    "title": { "stringValue": "Standup" },
                    "description": { "stringValue": "Daily sync" },
                    "id": { "integerValue": "2" }
                },
                "createTime": "2020-01-01T00:00:00Z",
                "updateTime": "2020-01-01T00:00:00Z"
            }]
        }"#;
        let body: ListDocumentsResponse = serde_json::from_str(raw).unwrap();
        let event = to_event(body.documents.into_iter().next().unwrap().fields).unwrap();
        assert_eq!(
            event,
            Event {
                title: "Standup".to_string(),
                id: 2,
                description: "Daily sync".to_string(),
            }
        );
    }

    #[test]
    fn it_should_decode_an_empty_collection_as_no_documents() {
        let body: ListDocumentsResponse = serde_json::from_str("{}").unwrap();
        assert!(body.documents.is_empty());
    }

    #[test]
    fn it_should_reject_a_non_integer_id() {
        let fields = EventFields {
            title: StringValue {
                string_value: "x".to_string(),
            },
            description: StringValue {
                string_value: "y".to_string(),
            },
            id: IntegerValue {
                integer_value: "not-a-number".to_string(),
            },
        };
        assert!(matches!(to_event(fields), Err(StoreError::Malformed(_))));
    }
}
