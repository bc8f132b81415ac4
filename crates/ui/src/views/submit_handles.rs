use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use progression_core::CreditTuple;

/// Exposes a view's submit callback so tests can drive it without a click.
#[derive(Clone, Default)]
pub(crate) struct SubmitTestHandles {
    submit: Rc<RefCell<Option<Callback<CreditTuple>>>>,
}

impl SubmitTestHandles {
    pub(crate) fn register(&self, submit: Callback<CreditTuple>) {
        *self.submit.borrow_mut() = Some(submit);
    }

    pub(crate) fn submit(&self) -> Callback<CreditTuple> {
        (*self.submit.borrow()).expect("submit callback registered")
    }
}

/// Hands `submit` to the harness once, if one is listening.
pub(crate) fn use_submit_test_handles(submit: Callback<CreditTuple>) {
    let mut registered = use_signal(|| false);
    if !registered() {
        registered.set(true);
        if let Some(handles) = try_consume_context::<SubmitTestHandles>() {
            handles.register(submit);
        }
    }
}
