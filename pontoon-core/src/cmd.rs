/// Batch of effect requests produced by an application's `init`/`update`.
/// The request type `Req` is the application's own request enum.
pub struct CoreCmd<Req>(Vec<Req>);

impl<Req> CoreCmd<Req> {
    /// Command that produces no effects.
    pub fn none() -> Self {
        CoreCmd(Vec::new())
    }

    /// Command carrying a single request.
    pub fn single(req: Req) -> Self {
        CoreCmd(vec![req])
    }

    /// Combine commands, preserving order.
    pub fn batch(cmds: impl IntoIterator<Item = CoreCmd<Req>>) -> Self {
        let mut all = Vec::new();
        for CoreCmd(mut reqs) in cmds {
            all.append(&mut reqs);
        }
        CoreCmd(all)
    }

    /// Hand the requests over for dispatch.
    pub fn into_inner(self) -> Vec<Req> {
        self.0
    }
}

impl<Req> Default for CoreCmd<Req> {
    fn default() -> Self {
        Self::none()
    }
}
