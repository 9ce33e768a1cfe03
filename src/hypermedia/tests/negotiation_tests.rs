//! Tests for media type selection and body rendering.

use super::fixtures::{collection_view_model, item_view_model};
use crate::hypermedia::{
    domain::{ProblemDocument, Renderable, TodoCollectionViewModel, TodoViewModel},
    negotiation::{
        Charset, FormatRequest, MediaType, NegotiationError, OutputEncoder, OutputNegotiator,
        Payload, PayloadKind, RenderError,
    },
};
use rstest::{fixture, rstest};

#[fixture]
fn negotiator() -> OutputNegotiator {
    OutputNegotiator::standard()
}

#[rstest]
#[case::absent(FormatRequest::new(), MediaType::Json)]
#[case::blank(FormatRequest::new().with_accept("  "), MediaType::Json)]
#[case::json(FormatRequest::new().with_accept("application/json"), MediaType::Json)]
#[case::any(FormatRequest::new().with_accept("*/*"), MediaType::Json)]
#[case::any_application(FormatRequest::new().with_accept("application/*"), MediaType::Json)]
#[case::siren(
    FormatRequest::new().with_accept("application/vnd.siren+json"),
    MediaType::Siren
)]
#[case::hal(FormatRequest::new().with_accept("application/hal+json"), MediaType::Hal)]
#[case::first_supported_wins(
    FormatRequest::new().with_accept("text/html, application/hal+json;q=0.9, application/json"),
    MediaType::Hal
)]
#[case::case_insensitive(
    FormatRequest::new().with_accept("Application/HAL+JSON"),
    MediaType::Hal
)]
#[case::override_beats_accept(
    FormatRequest::new()
        .with_format_override("siren")
        .with_accept("application/hal+json"),
    MediaType::Siren
)]
#[case::override_json(FormatRequest::new().with_format_override("JSON"), MediaType::Json)]
fn view_models_select_expected_media_type(
    negotiator: OutputNegotiator,
    #[case] request: FormatRequest,
    #[case] expected: MediaType,
) {
    assert_eq!(negotiator.select(&request, PayloadKind::Item), Ok(expected));
    assert_eq!(
        negotiator.select(&request, PayloadKind::Collection),
        Ok(expected)
    );
}

#[rstest]
#[case::unknown_accept(FormatRequest::new().with_accept("text/html"), "text/html")]
#[case::problem_accept(
    FormatRequest::new().with_accept("application/problem+json"),
    "application/problem+json"
)]
#[case::unknown_override(FormatRequest::new().with_format_override("xml"), "xml")]
#[case::problem_override(FormatRequest::new().with_format_override("problem"), "problem")]
fn unsupported_requests_are_rejected(
    negotiator: OutputNegotiator,
    #[case] request: FormatRequest,
    #[case] requested: &str,
) {
    assert_eq!(
        negotiator.select(&request, PayloadKind::Item),
        Err(NegotiationError::UnsupportedMediaType(requested.to_owned()))
    );
}

#[rstest]
fn problem_payloads_default_to_problem_json(negotiator: OutputNegotiator) {
    assert_eq!(
        negotiator.select(&FormatRequest::new(), PayloadKind::Problem),
        Ok(MediaType::Problem)
    );
}

#[rstest]
#[case::absent(None, Charset::Utf8)]
#[case::utf8(Some("utf-8"), Charset::Utf8)]
#[case::utf16(Some("utf-16"), Charset::Utf16)]
#[case::unicode(Some("iso-8859-1, Unicode;q=0.5"), Charset::Utf16)]
#[case::other(Some("iso-8859-1"), Charset::Utf8)]
fn charset_follows_accept_charset(#[case] header: Option<&str>, #[case] expected: Charset) {
    assert_eq!(Charset::from_accept_charset(header), expected);
}

#[rstest]
fn siren_body_has_siren_content_type(
    negotiator: OutputNegotiator,
    item_view_model: TodoViewModel,
) {
    let request = FormatRequest::new().with_format_override("siren");
    let renderable = Renderable::from(item_view_model);
    let body = negotiator
        .render(&request, &Payload::from(&renderable))
        .expect("render should succeed");

    assert_eq!(
        body.content_type(),
        "application/vnd.siren+json; charset=utf-8"
    );
    let value: serde_json::Value =
        serde_json::from_slice(body.bytes()).expect("body should be JSON");
    assert_eq!(value["class"], serde_json::json!(["todo"]));
}

#[rstest]
#[expect(
    clippy::indexing_slicing,
    reason = "chunks_exact(2) yields two-byte chunks"
)]
#[expect(
    clippy::little_endian_bytes,
    reason = "UTF-16 bodies are little-endian"
)]
fn utf16_body_decodes_to_the_utf8_text(
    negotiator: OutputNegotiator,
    collection_view_model: TodoCollectionViewModel,
) {
    let renderable = Renderable::from(collection_view_model);
    let payload = Payload::from(&renderable);
    let utf8 = negotiator
        .render(&FormatRequest::new().with_format_override("hal"), &payload)
        .expect("render should succeed");
    let utf16 = negotiator
        .render(
            &FormatRequest::new()
                .with_format_override("hal")
                .with_accept_charset("utf-16"),
            &payload,
        )
        .expect("render should succeed");

    assert_eq!(utf16.content_type(), "application/hal+json; charset=utf-16");
    let units: Vec<u16> = utf16
        .bytes()
        .chunks_exact(2)
        .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
        .collect();
    let decoded = String::from_utf16(&units).expect("body should be UTF-16");
    assert_eq!(decoded.as_bytes(), utf8.bytes());
}

#[rstest]
fn problem_documents_bypass_the_registries(negotiator: OutputNegotiator) {
    let problem = ProblemDocument::new(404).expect("status should be valid");
    let body = negotiator
        .render_problem(&problem, Charset::Utf8)
        .expect("problem should render");

    assert_eq!(body.media_type(), MediaType::Problem);
    assert_eq!(body.bytes(), br#"{"status":404,"type":"about:blank"}"#);
}

#[rstest]
fn problem_encoder_refuses_view_models(
    negotiator: OutputNegotiator,
    item_view_model: TodoViewModel,
) {
    let renderable = Renderable::from(item_view_model);
    let result = negotiator.render_as(
        MediaType::Problem,
        &Payload::from(&renderable),
        Charset::Utf8,
    );
    assert!(matches!(
        result,
        Err(RenderError::NotEncodable {
            media_type: MediaType::Problem,
            kind: PayloadKind::Item,
        })
    ));
}

#[rstest]
fn empty_negotiator_cannot_render(item_view_model: TodoViewModel) {
    let renderable = Renderable::from(item_view_model);
    let result = OutputNegotiator::new().render(&FormatRequest::new(), &Payload::from(&renderable));
    assert!(matches!(result, Err(RenderError::Negotiation(_))));
}

struct RefusingEncoder;

impl OutputEncoder for RefusingEncoder {
    fn media_type(&self) -> MediaType {
        MediaType::Json
    }

    fn can_encode(&self, _kind: PayloadKind) -> bool {
        false
    }

    fn encode(&self, payload: &Payload<'_>, _charset: Charset) -> Result<Vec<u8>, RenderError> {
        Err(RenderError::NotEncodable {
            media_type: MediaType::Json,
            kind: payload.kind(),
        })
    }
}

#[rstest]
fn with_encoder_replaces_same_media_type(negotiator: OutputNegotiator) {
    let replaced = negotiator.with_encoder(RefusingEncoder);

    assert!(!replaced.can_encode(MediaType::Json, PayloadKind::Item));
    assert!(replaced.can_encode(MediaType::Hal, PayloadKind::Item));
    assert_eq!(
        replaced.select(&FormatRequest::new(), PayloadKind::Item),
        Err(NegotiationError::UnsupportedMediaType("*/*".to_owned()))
    );
}

#[rstest]
#[case::siren("siren", Some(MediaType::Siren))]
#[case::hal(" HAL ", Some(MediaType::Hal))]
#[case::problem("problem", Some(MediaType::Problem))]
#[case::unknown("xml", None)]
fn format_overrides_map_to_media_types(#[case] raw: &str, #[case] expected: Option<MediaType>) {
    assert_eq!(MediaType::from_format_override(raw), expected);
}
