//! Deploy manifest parsing.
//!
//! The manifest is a small XML document listing files that are copied
//! alongside the compiled output:
//!
//! ```xml
//! <Deploy>
//!   <ItemGroup>
//!     <File Include="Config/appsettings.json">
//!       <CopyToOutput>PreserveNewest</CopyToOutput>
//!     </File>
//!   </ItemGroup>
//! </Deploy>
//! ```
//!
//! Item groups may appear at any depth; items are their direct children and
//! may use any element name. Only items whose `CopyToOutput` child is exactly
//! one of the two preserve values are selected; everything else is silently
//! ignored. The path comes from the `Include` attribute, falling back to
//! `Update`.

use crate::error::{Error, Result};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

const ITEM_GROUP: &str = "ItemGroup";
const COPY_ELEMENT: &str = "CopyToOutput";
const PRESERVE_VALUES: [&str; 2] = ["PreserveNewest", "Always"];

/// Extract the inclusion patterns of all selected items, in document order.
pub fn parse_manifest(xml: &str) -> Result<Vec<String>> {
    let mut reader = Reader::from_str(xml);

    let mut stack: Vec<String> = Vec::new();
    let mut item: Option<PendingItem> = None;
    let mut in_copy_policy = false;
    let mut patterns = Vec::new();

    loop {
        match reader.read_event()? {
            Event::Start(start) => {
                let name = local_name(&start);
                if item.is_none() && stack.last().map(String::as_str) == Some(ITEM_GROUP) {
                    item = Some(PendingItem {
                        include: include_attribute(&start),
                        selected: false,
                        depth: stack.len(),
                    });
                } else if let Some(pending) = &item {
                    in_copy_policy = name == COPY_ELEMENT && stack.len() == pending.depth + 1;
                }
                stack.push(name);
            }
            Event::Text(text) => {
                if in_copy_policy {
                    let value = text
                        .unescape()
                        .map_err(|e| Error::Manifest(e.to_string()))?;
                    if PRESERVE_VALUES.contains(&value.trim()) {
                        if let Some(pending) = &mut item {
                            pending.selected = true;
                        }
                    }
                }
            }
            Event::End(_) => {
                let name = stack.pop().unwrap_or_default();
                if in_copy_policy && name == COPY_ELEMENT {
                    in_copy_policy = false;
                }
                if let Some(pending) = &item {
                    if stack.len() == pending.depth {
                        if pending.selected {
                            if let Some(include) = &pending.include {
                                if !include.trim().is_empty() {
                                    patterns.push(include.clone());
                                }
                            } else {
                                log::debug!("manifest item selected but has no Include/Update path");
                            }
                        }
                        item = None;
                    }
                }
            }
            // An empty item element has no copy policy child, so it is never
            // selected; empty elements inside an item carry no text either.
            Event::Empty(_) => {}
            Event::Eof => break,
            _ => {}
        }
    }

    log::debug!("manifest selected {} inclusion pattern(s)", patterns.len());
    Ok(patterns)
}

struct PendingItem {
    include: Option<String>,
    selected: bool,
    depth: usize,
}

fn local_name(start: &BytesStart<'_>) -> String {
    String::from_utf8_lossy(start.local_name().as_ref()).into_owned()
}

fn include_attribute(start: &BytesStart<'_>) -> Option<String> {
    for attr_name in ["Include", "Update"] {
        let found = start
            .attributes()
            .with_checks(false)
            .flatten()
            .find(|a| a.key.local_name().as_ref() == attr_name.as_bytes())
            .and_then(|a| a.unescape_value().ok());
        if let Some(value) = found {
            return Some(value.into_owned());
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selects_only_preserve_values() {
        let xml = r#"
            <Deploy>
              <ItemGroup>
                <File Include="included.txt"><CopyToOutput>PreserveNewest</CopyToOutput></File>
                <File Include="also.txt"><CopyToOutput>Always</CopyToOutput></File>
                <File Include="excluded.txt"><CopyToOutput>Never</CopyToOutput></File>
                <File Include="no-policy.txt"/>
              </ItemGroup>
            </Deploy>"#;
        let patterns = parse_manifest(xml).unwrap();
        assert_eq!(patterns, vec!["included.txt", "also.txt"]);
    }

    #[test]
    fn update_attribute_is_a_fallback() {
        let xml = r#"
            <Deploy><ItemGroup>
              <File Update="from-update.txt"><CopyToOutput>PreserveNewest</CopyToOutput></File>
            </ItemGroup></Deploy>"#;
        assert_eq!(parse_manifest(xml).unwrap(), vec!["from-update.txt"]);
    }

    #[test]
    fn item_groups_at_any_depth() {
        let xml = r#"
            <Deploy><Section><ItemGroup>
              <Content Include="deep.json"><CopyToOutput>Always</CopyToOutput></Content>
            </ItemGroup></Section></Deploy>"#;
        assert_eq!(parse_manifest(xml).unwrap(), vec!["deep.json"]);
    }

    #[test]
    fn nested_elements_inside_items_are_not_items() {
        let xml = r#"
            <Deploy><ItemGroup>
              <File Include="outer.txt">
                <Metadata>ignored</Metadata>
                <CopyToOutput>PreserveNewest</CopyToOutput>
              </File>
            </ItemGroup></Deploy>"#;
        assert_eq!(parse_manifest(xml).unwrap(), vec!["outer.txt"]);
    }

    #[test]
    fn malformed_xml_is_an_error() {
        assert!(parse_manifest("<Deploy><ItemGroup></Wrong></Deploy>").is_err());
    }
}
