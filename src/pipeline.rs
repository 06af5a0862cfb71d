use super::*;

pub(crate) struct Pipeline<'a> {
  context: Context<'a>,
  stages: Vec<Box<dyn Stage + 'a>>,
}

impl<'a> Pipeline<'a> {
  fn add_stage(&mut self, stage: Box<dyn Stage + 'a>) {
    self.stages.push(stage);
  }

  pub(crate) fn new(context: Context<'a>) -> Self {
    Self {
      context,
      stages: Vec::new(),
    }
  }

  pub(crate) fn run(mut self) -> Context<'a> {
    for stage in &mut self.stages {
      tracing::trace!(stage = stage.name(), "running stage");
      stage.run(&mut self.context);
    }

    self.context
  }

  pub(crate) fn with_default_stages(context: Context<'a>) -> Self {
    let copy_buttons =
      context.options().copy_button == Some(CopyButtonStrategy::Tree);

    let mut pipeline = Self::new(context);

    pipeline.add_stage(Box::new(HeadingAnchorStage));
    pipeline.add_stage(Box::new(HighlightCodeBlocksStage));

    if copy_buttons {
      pipeline.add_stage(Box::new(CopyButtonStage));
    }

    pipeline
  }
}
