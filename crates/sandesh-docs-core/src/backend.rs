//! Rendering backend abstraction

use crate::ast::Block;

/// Turns a rendered node sequence into output text.
///
/// Implementations must handle every [`Block`] variant; the node model is
/// closed, so a new variant is a compile error in every backend.
pub trait Backend {
    fn render(&self, blocks: &[Block]) -> String;
}

impl<B: Backend + ?Sized> Backend for &B {
    fn render(&self, blocks: &[Block]) -> String {
        (**self).render(blocks)
    }
}

impl<B: Backend + ?Sized> Backend for Box<B> {
    fn render(&self, blocks: &[Block]) -> String {
        (**self).render(blocks)
    }
}
