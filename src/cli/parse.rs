use commit_embed_core::document::SelectionSpec;
use commit_embed_core::note::ItemKind;

/// Parse item kind from string
pub fn parse_item_kind(s: &str) -> std::result::Result<ItemKind, String> {
    s.parse::<ItemKind>().map_err(|e| e.to_string())
}

/// Parse a line range (`N` or `A:B`)
pub fn parse_line_range(s: &str) -> std::result::Result<SelectionSpec, String> {
    SelectionSpec::parse_lines(s).map_err(|e| e.to_string())
}
