//! A small subset of CSS selectors.
//!
//! Supports compound selectors made of an optional tag (or `*`), an `#id`,
//! any number of `.class` parts and `[attr]` / `[attr=value]` parts, plus
//! comma-separated lists of those. Combinators (descendant, child, sibling)
//! are rejected; scope a query with [`crate::Document::query_all_within`]
//! instead.

use std::fmt;
use std::str::FromStr;

use crate::element::Element;
use crate::error::DomError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    source: String,
    alternatives: Vec<Compound>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Compound {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
    attributes: Vec<AttrMatch>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct AttrMatch {
    name: String,
    value: Option<String>,
}

impl Selector {
    pub fn parse(input: &str) -> Result<Self, DomError> {
        let alternatives = input
            .split(',')
            .map(|part| parse_compound(input, part))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            source: input.trim().to_string(),
            alternatives,
        })
    }

    /// Selector matching exactly the element with this id.
    pub fn id(id: &str) -> Self {
        Self {
            source: format!("#{id}"),
            alternatives: vec![Compound {
                id: Some(id.to_string()),
                ..Default::default()
            }],
        }
    }

    pub fn matches(&self, element: &Element) -> bool {
        self.alternatives.iter().any(|c| c.matches(element))
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }
}

impl FromStr for Selector {
    type Err = DomError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl Compound {
    fn matches(&self, element: &Element) -> bool {
        if let Some(tag) = &self.tag {
            if &element.tag != tag {
                return false;
            }
        }
        if let Some(id) = &self.id {
            if &element.id != id {
                return false;
            }
        }
        if !self.classes.iter().all(|c| element.has_class(c)) {
            return false;
        }
        self.attributes.iter().all(|attr| match &attr.value {
            None => element.has_attr(&attr.name),
            Some(expected) => element.get_attr(&attr.name) == Some(expected.as_str()),
        })
    }
}

fn is_part_start(c: char) -> bool {
    matches!(c, '#' | '.' | '[')
}

fn check_ident(source: &str, name: &str) -> Result<(), DomError> {
    if name.is_empty() {
        return Err(DomError::invalid_selector(source, "empty name"));
    }
    if let Some(bad) = name
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || *c == '-' || *c == '_'))
    {
        return Err(DomError::invalid_selector(
            source,
            format!("unexpected character {bad:?} in {name:?}"),
        ));
    }
    Ok(())
}

fn unquote(value: &str) -> &str {
    let bytes = value.as_bytes();
    if bytes.len() >= 2
        && (bytes[0] == b'"' || bytes[0] == b'\'')
        && bytes[bytes.len() - 1] == bytes[0]
    {
        &value[1..value.len() - 1]
    } else {
        value
    }
}

fn parse_compound(source: &str, part: &str) -> Result<Compound, DomError> {
    let part = part.trim();
    if part.is_empty() {
        return Err(DomError::invalid_selector(source, "empty selector"));
    }

    let mut compound = Compound::default();

    let tag_end = part.find(is_part_start).unwrap_or(part.len());
    let tag = &part[..tag_end];
    if !tag.is_empty() && tag != "*" {
        check_ident(source, tag)?;
        compound.tag = Some(tag.to_ascii_lowercase());
    }

    let mut rest = &part[tag_end..];
    while let Some(c) = rest.chars().next() {
        match c {
            '#' | '.' => {
                let body = &rest[1..];
                let end = body.find(is_part_start).unwrap_or(body.len());
                let name = &body[..end];
                check_ident(source, name)?;
                if c == '#' {
                    compound.id = Some(name.to_string());
                } else {
                    compound.classes.push(name.to_string());
                }
                rest = &body[end..];
            }
            '[' => {
                let close = rest
                    .find(']')
                    .ok_or_else(|| DomError::invalid_selector(source, "unclosed '['"))?;
                let inner = &rest[1..close];
                let (name, value) = match inner.split_once('=') {
                    Some((name, value)) => (name.trim(), Some(unquote(value.trim()).to_string())),
                    None => (inner.trim(), None),
                };
                check_ident(source, name)?;
                compound.attributes.push(AttrMatch {
                    name: name.to_string(),
                    value,
                });
                rest = &rest[close + 1..];
            }
            other => {
                return Err(DomError::invalid_selector(
                    source,
                    format!("unexpected character {other:?}"),
                ));
            }
        }
    }

    Ok(compound)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_compound_parts() {
        let sel = Selector::parse("button.primary[type=submit]").unwrap();
        let button = Element::button("Send")
            .class("primary")
            .attr("type", "submit");
        assert!(sel.matches(&button));
        assert!(!sel.matches(&Element::button("Send").attr("type", "submit")));
    }

    #[test]
    fn quoted_attribute_values() {
        let sel = Selector::parse("a[href='#main']").unwrap();
        assert!(sel.matches(&Element::link("#main")));
        assert!(!sel.matches(&Element::link("#top")));
    }

    #[test]
    fn rejects_combinators() {
        assert!(matches!(
            Selector::parse("form input"),
            Err(DomError::InvalidSelector { .. })
        ));
        assert!(Selector::parse("div > p").is_err());
        assert!(Selector::parse("").is_err());
        assert!(Selector::parse("[data-src").is_err());
    }

    #[test]
    fn universal_tag() {
        let sel = Selector::parse("*[required]").unwrap();
        assert!(sel.matches(&Element::textarea().required()));
        assert!(!sel.matches(&Element::textarea()));
    }
}
