use crate::{
    core::{KnClient, KnError},
    translate::wire,
};

pub(super) async fn translate_text(
    client: &KnClient,
    text: &str,
    target: &str,
) -> Result<String, KnError> {
    let mut url = client.base_translate().join("translate_a/single")?;
    url.query_pairs_mut()
        .append_pair("client", "gtx")
        .append_pair("sl", "auto")
        .append_pair("tl", target)
        .append_pair("dt", "t")
        .append_pair("q", text);

    tracing::debug!(chars = text.len(), %target, "requesting translation");

    let resp = client.http().get(url.clone()).send().await?;

    if !resp.status().is_success() {
        return Err(KnError::Status {
            status: resp.status().as_u16(),
            url: url.to_string(),
        });
    }

    let body = resp.text().await?;
    wire::parse_translation(&body)
}
