use serde_json::Value;

use crate::core::KnError;

/// Parse the `gtx` translation response.
///
/// The body is a heterogeneous JSON array; element 0 is a list of segments,
/// and each segment is a list whose element 0 is the translated chunk.
/// Chunks are concatenated in order.
pub(crate) fn parse_translation(body: &str) -> Result<String, KnError> {
    let root: Value = serde_json::from_str(body)?;

    let segments = root
        .get(0)
        .and_then(Value::as_array)
        .ok_or_else(|| KnError::Data("translation response missing segment list".into()))?;

    let mut out = String::new();
    for seg in segments {
        if let Some(chunk) = seg.get(0).and_then(Value::as_str) {
            out.push_str(chunk);
        }
    }

    if out.is_empty() {
        return Err(KnError::Data(
            "translation response contained no text segments".into(),
        ));
    }

    Ok(out)
}
