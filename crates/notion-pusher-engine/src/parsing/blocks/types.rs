use crate::parsing::inline::Run;

/// One cell of a table row: the cell's text, inline-tokenized.
pub type Cell = Vec<Run>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub cells: Vec<Cell>,
}

/// A table with a uniform column count.
///
/// Every row holds exactly `column_count` cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub column_count: usize,
    pub rows: Vec<Row>,
}

/// Heading depth supported by the target format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
}

impl HeadingLevel {
    /// Maps a count of leading `#` to a level. Anything deeper than three
    /// becomes [`HeadingLevel::H3`].
    pub fn from_depth(depth: usize) -> Self {
        match depth {
            0 | 1 => HeadingLevel::H1,
            2 => HeadingLevel::H2,
            _ => HeadingLevel::H3,
        }
    }

    pub fn depth(self) -> u8 {
        match self {
            HeadingLevel::H1 => 1,
            HeadingLevel::H2 => 2,
            HeadingLevel::H3 => 3,
        }
    }
}

/// A top-level structural unit of the output document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Heading {
        level: HeadingLevel,
        runs: Vec<Run>,
    },
    Paragraph {
        runs: Vec<Run>,
    },
    BulletItem {
        runs: Vec<Run>,
        /// Blocks nested under this item. Never nested further.
        children: Vec<Block>,
    },
    NumberedItem {
        runs: Vec<Run>,
        children: Vec<Block>,
    },
    Quote {
        runs: Vec<Run>,
    },
    Divider,
    CodeBlock {
        language: String,
        /// Lines joined with `\n`, each right-trimmed.
        content: String,
    },
    EquationBlock {
        expression: String,
    },
    ImageBlock {
        url: String,
    },
    Table(Table),
}

impl Block {
    /// Children of a list item, or `None` for blocks that cannot nest.
    pub fn children_mut(&mut self) -> Option<&mut Vec<Block>> {
        match self {
            Block::BulletItem { children, .. } | Block::NumberedItem { children, .. } => {
                Some(children)
            }
            _ => None,
        }
    }

    pub fn children(&self) -> &[Block] {
        match self {
            Block::BulletItem { children, .. } | Block::NumberedItem { children, .. } => children,
            _ => &[],
        }
    }

    pub fn is_list_item(&self) -> bool {
        matches!(self, Block::BulletItem { .. } | Block::NumberedItem { .. })
    }

    /// The inline runs of a text-bearing block.
    pub fn runs(&self) -> Option<&[Run]> {
        match self {
            Block::Heading { runs, .. }
            | Block::Paragraph { runs }
            | Block::BulletItem { runs, .. }
            | Block::NumberedItem { runs, .. }
            | Block::Quote { runs } => Some(runs),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(1, HeadingLevel::H1)]
    #[case(2, HeadingLevel::H2)]
    #[case(3, HeadingLevel::H3)]
    #[case(4, HeadingLevel::H3)]
    #[case(6, HeadingLevel::H3)]
    fn heading_depth_caps_at_three(#[case] depth: usize, #[case] expected: HeadingLevel) {
        assert_eq!(HeadingLevel::from_depth(depth), expected);
        assert_eq!(expected.depth() as usize, depth.min(3));
    }

    #[test]
    fn only_list_items_have_children() {
        let mut item = Block::BulletItem {
            runs: vec![],
            children: vec![],
        };
        assert!(item.children_mut().is_some());
        assert!(Block::Divider.children().is_empty());
        assert!(Block::Paragraph { runs: vec![] }.children_mut().is_none());
    }
}
