pub type Result<T, E = DescriptorError> = std::result::Result<T, E>;

/// Failures while decoding a descriptor from text.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum DescriptorError {
	#[error("invalid JSON descriptor: {0}")]
	Json(#[from] serde_json::Error),
	#[error("invalid XML descriptor: {0}")]
	Xml(#[from] roxmltree::Error),
}
