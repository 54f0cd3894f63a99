use noteboard_core::{ContentElement, TodoItem};
use serde_json::json;

#[test]
fn elements_serialize_as_type_and_content() {
    let text = serde_json::to_value(ContentElement::text("hi")).unwrap();
    assert_eq!(text, json!({ "type": "text", "content": "hi" }));

    let todo = ContentElement::Todo(vec![TodoItem {
        text: "milk".to_string(),
        checked: true,
    }]);
    assert_eq!(
        serde_json::to_value(&todo).unwrap(),
        json!({ "type": "todo", "content": [{ "text": "milk", "checked": true }] })
    );

    let image = serde_json::to_value(ContentElement::image()).unwrap();
    assert_eq!(image, json!({ "type": "image", "content": "" }));
}

#[test]
fn elements_deserialize_from_wire_shape() {
    let decoded: Vec<ContentElement> = serde_json::from_value(json!([
        { "type": "text", "content": "body" },
        { "type": "todo", "content": [] },
        { "type": "image", "content": "data:image/png;base64,AA==" }
    ]))
    .unwrap();
    assert_eq!(
        decoded,
        vec![
            ContentElement::text("body"),
            ContentElement::todo(),
            ContentElement::Image("data:image/png;base64,AA==".to_string()),
        ]
    );
}

#[test]
fn unknown_element_type_is_rejected() {
    let result = serde_json::from_value::<ContentElement>(json!({ "type": "video", "content": "" }));
    assert!(result.is_err());
}
