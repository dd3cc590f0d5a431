//! FAQPage builder.

use crate::object::SchemaObject;
use tasca_types::FaqItem;

/// Build an `FAQPage`, or `None` when there is nothing to render.
///
/// Answers are copied verbatim; escaping for HTML is the renderer's job.
pub fn faq_page(items: Option<&[FaqItem]>) -> Option<SchemaObject> {
    let items = items.filter(|items| !items.is_empty())?;

    let questions: Vec<SchemaObject> = items
        .iter()
        .map(|item| {
            SchemaObject::new("Question")
                .with("name", item.question.as_str())
                .with(
                    "acceptedAnswer",
                    SchemaObject::new("Answer").with("text", item.answer.as_str()),
                )
        })
        .collect();

    Some(SchemaObject::document("FAQPage").with("mainEntity", questions))
}
