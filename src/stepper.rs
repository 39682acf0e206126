use std::ops::ControlFlow;

pub trait Step<Ctx, B, C = ()> {
    type Error;

    fn step(&mut self, context: &Ctx) -> Result<ControlFlow<B, C>, Self::Error>;

    fn finish(&mut self, context: &Ctx) -> Result<B, Self::Error> {
        loop {
            if let ControlFlow::Break(outcome) = self.step(context)? {
                return Ok(outcome);
            }
        }
    }
}
