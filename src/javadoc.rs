//! Documentation comment parsing
//!
//! Splits a `/** ... */` comment into its free-text description and its block
//! tags (`@name payload`). Inline tags such as `{@link Foo}` stay part of the
//! surrounding text.

/// Tag whose payload overrides the documented type of a method
pub const TYPE_TAG: &str = "type";

/// One block tag: `@name payload`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockTag {
    pub name: String,
    pub content: String,
}

/// A parsed documentation comment
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocComment {
    description: String,
    block_tags: Vec<BlockTag>,
}

impl DocComment {
    /// Parse a raw comment. The `/**` and `*/` delimiters are optional.
    pub fn parse(raw: &str) -> Self {
        let lines = clean_lines(comment_body(raw));

        let first_tag = lines.iter().position(|line| is_block_line(line));
        let (description_lines, tag_lines) = match first_tag {
            Some(index) => lines.split_at(index),
            None => (lines.as_slice(), &[][..]),
        };

        Self {
            description: description_lines.join("\n").trim_end().to_string(),
            block_tags: split_block_tags(tag_lines),
        }
    }

    /// Free text before the first block tag, `None` when empty
    pub fn description(&self) -> Option<&str> {
        if self.description.is_empty() {
            None
        } else {
            Some(&self.description)
        }
    }

    pub fn block_tags(&self) -> &[BlockTag] {
        &self.block_tags
    }

    /// First block tag with the given name; later duplicates are ignored
    pub fn first_tag(&self, name: &str) -> Option<&BlockTag> {
        self.block_tags.iter().find(|tag| tag.name == name)
    }

    /// Payload of the first tag with the given name, `None` if the tag is
    /// missing or its payload is empty
    pub fn tag_content(&self, name: &str) -> Option<&str> {
        self.first_tag(name)
            .map(|tag| tag.content.as_str())
            .filter(|content| !content.is_empty())
    }
}

/// Whether raw comment text is a documentation comment (`/** ... */`)
pub fn is_doc_comment(raw: &str) -> bool {
    let trimmed = raw.trim();
    trimmed.starts_with("/**") && trimmed != "/**/"
}

fn comment_body(raw: &str) -> &str {
    let trimmed = raw.trim();
    if trimmed == "/**/" {
        return "";
    }
    let body = trimmed.strip_prefix("/**").unwrap_or(trimmed);
    body.strip_suffix("*/").unwrap_or(body)
}

/// Strip the leading `*` decoration, blank out whitespace-only lines and drop
/// empty lines at both ends
fn clean_lines(body: &str) -> Vec<String> {
    let mut lines: Vec<String> = body
        .lines()
        .map(|line| {
            let cleaned = match line.trim_start().strip_prefix('*') {
                Some(rest) => rest.strip_prefix(|c: char| c == ' ' || c == '\t').unwrap_or(rest),
                None => line,
            };
            if cleaned.trim().is_empty() {
                String::new()
            } else {
                cleaned.to_string()
            }
        })
        .collect();

    // Text on the opening line usually follows "/** "
    if let Some(first) = lines.first_mut() {
        if first.starts_with(|c: char| c == ' ' || c == '\t') {
            first.remove(0);
        }
    }

    let start = lines.iter().position(|l| !l.is_empty()).unwrap_or(lines.len());
    let end = lines
        .iter()
        .rposition(|l| !l.is_empty())
        .map_or(start, |i| i + 1);
    lines.drain(end..);
    lines.drain(..start);
    lines
}

fn is_block_line(line: &str) -> bool {
    line.trim_start().starts_with('@')
}

/// Group tag lines: a line starting with `@` opens a tag, the following lines
/// continue it
fn split_block_tags(lines: &[String]) -> Vec<BlockTag> {
    let mut blocks: Vec<Vec<&str>> = Vec::new();
    for line in lines {
        if is_block_line(line) || blocks.is_empty() {
            blocks.push(vec![line.as_str()]);
        } else if let Some(block) = blocks.last_mut() {
            block.push(line.as_str());
        }
    }

    blocks
        .into_iter()
        .filter_map(|block| parse_block_tag(&block.join("\n")))
        .collect()
}

fn parse_block_tag(text: &str) -> Option<BlockTag> {
    let text = text.trim().strip_prefix('@')?;
    let name_end = text.find(char::is_whitespace).unwrap_or(text.len());
    let (name, rest) = text.split_at(name_end);
    if name.is_empty() {
        return None;
    }
    Some(BlockTag {
        name: name.to_string(),
        content: rest.trim().to_string(),
    })
}
