//! Renderers bound to one concrete view type

use std::marker::PhantomData;

use crate::error::Result;
use crate::view::View;

use super::{AttributeAppender, StateRenderer};

/// Runs a closure for views that downcast to `T` and does nothing otherwise.
pub struct TypedRenderer<T, F> {
    name: &'static str,
    render: F,
    _view: PhantomData<fn(&T)>,
}

impl<T, F> StateRenderer for TypedRenderer<T, F>
where
    T: View,
    F: Fn(&mut AttributeAppender<'_>, &T) -> Result<()>,
{
    fn name(&self) -> &'static str {
        self.name
    }

    fn append_attributes(&self, out: &mut AttributeAppender<'_>, view: &dyn View) -> Result<()> {
        match view.as_any().downcast_ref::<T>() {
            Some(typed) => (self.render)(out, typed),
            None => Ok(()),
        }
    }
}

/// Build a renderer that only applies to views of type `T`.
pub fn renderer_for<T, F>(name: &'static str, render: F) -> TypedRenderer<T, F>
where
    T: View,
    F: Fn(&mut AttributeAppender<'_>, &T) -> Result<()>,
{
    TypedRenderer {
        name,
        render,
        _view: PhantomData,
    }
}
