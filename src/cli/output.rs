pub use commit_embed_core::format::OutputFormat;

/// Parse output format from string (`human` or `json`)
pub fn parse_output_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}
