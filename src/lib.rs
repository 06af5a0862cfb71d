use {
  code_block::CodeBlock,
  context::Context,
  document::Document,
  dom_query::{Matcher, Selection},
  highlight::Highlighter,
  pipeline::Pipeline,
  serde::{Deserialize, Serialize},
  stage::{
    CopyButtonStage, HeadingAnchorStage, HighlightCodeBlocksStage, Stage,
  },
  std::{
    collections::HashSet,
    fs,
    path::Path,
    sync::LazyLock,
  },
  syntect::{
    html::{ClassStyle, ClassedHTMLGenerator},
    parsing::{ParseState, ScopeStackOp, SyntaxReference, SyntaxSet},
    util::LinesWithEndings,
  },
};

pub use crate::{
  cms::{Article, Author, Image, Sys, Tag},
  content::{Heading, ProcessedContent},
  copy_button::{COPY_CODE_SCRIPT, CopyButtonStrategy},
  error::Error,
  options::{AnchorStyle, ProcessorOptions, ProcessorOptionsBuilder},
  pagination::Pagination,
  processor::Processor,
  source::{ArticleSource, JsonArticleSource},
};

mod cms;
mod code_block;
mod content;
mod context;
mod copy_button;
mod document;
mod error;
mod highlight;
mod options;
mod pagination;
mod pipeline;
mod processor;
mod re;
mod source;
mod stage;

pub type Result<T = (), E = Error> = std::result::Result<T, E>;
