//! Event schema models: the stored row and the partial-update payload.

use crate::service::Validate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// One planned event. `id` is assigned by the store when omitted on create.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
#[schema(example = json!({
    "title": "FastAPI Book Launch",
    "image": "https://linktomyimage.com/image.png",
    "description": "We will be discussing the contents of the FastAPI book in this event.Ensure to come with your own copy to win gifts!",
    "tags": ["python", "fastapi", "book", "launch"],
    "location": "Google Meet"
}))]
pub struct Event {
    #[serde(default)]
    pub id: Option<i64>,
    pub title: String,
    pub image: String,
    pub description: String,
    #[sqlx(json)]
    pub tags: Vec<String>,
    pub location: String,
}

impl Validate for Event {}

/// Partial update: only fields that are present (and non-null) are applied.
#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
#[schema(example = json!({
    "title": "FastAPI Book Launch",
    "image": "https://linktomyimage.com/image.png",
    "description": "We will be discussing the contents of the FastAPI book in this event.Ensure to come with your own copy to win gifts!",
    "tags": ["python", "fastapi", "book", "launch"],
    "location": "Google Meet"
}))]
pub struct EventUpdate {
    pub title: Option<String>,
    pub image: Option<String>,
    pub description: Option<String>,
    pub tags: Option<Vec<String>>,
    pub location: Option<String>,
}

impl EventUpdate {
    /// Copy every set field onto `event`.
    pub fn apply_to(self, event: &mut Event) {
        if let Some(title) = self.title {
            event.title = title;
        }
        if let Some(image) = self.image {
            event.image = image;
        }
        if let Some(description) = self.description {
            event.description = description;
        }
        if let Some(tags) = self.tags {
            event.tags = tags;
        }
        if let Some(location) = self.location {
            event.location = location;
        }
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.image.is_none()
            && self.description.is_none()
            && self.tags.is_none()
            && self.location.is_none()
    }
}

impl Validate for EventUpdate {}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn launch() -> Event {
        Event {
            id: Some(1),
            title: "FastAPI Book Launch".into(),
            image: "https://linktomyimage.com/image.png".into(),
            description: "Book launch".into(),
            tags: vec!["python".into(), "fastapi".into()],
            location: "Google Meet".into(),
        }
    }

    #[test]
    fn apply_only_touches_present_fields() {
        let mut event = launch();
        let update: EventUpdate = serde_json::from_value(json!({"title": "Launch party", "tags": []})).unwrap();
        update.apply_to(&mut event);
        assert_eq!(event.title, "Launch party");
        assert!(event.tags.is_empty());
        assert_eq!(event.location, "Google Meet");
        assert_eq!(event.id, Some(1));
    }

    #[test]
    fn null_fields_are_left_alone() {
        let mut event = launch();
        let update: EventUpdate = serde_json::from_value(json!({"location": null})).unwrap();
        assert!(update.is_empty());
        update.apply_to(&mut event);
        assert_eq!(event, launch());
    }

    #[test]
    fn create_payload_without_id_deserializes() {
        let event: Event = serde_json::from_value(json!({
            "title": "t", "image": "i", "description": "d", "tags": ["a"], "location": "l"
        }))
        .unwrap();
        assert_eq!(event.id, None);
    }

    #[test]
    fn missing_required_field_is_rejected() {
        let res: Result<Event, _> = serde_json::from_value(json!({"title": "t"}));
        assert!(res.is_err());
    }
}
