//! Delete and archive flows of the tender modal.
//!
//! The two flows have deliberately different contracts:
//!
//! - **delete** is optimistic: the request is dispatched, then the modal
//!   closes and the success toast appears in the same call, before the backend
//!   answers. A failure surfaces afterwards as an error toast.
//! - **archive** is confirmation-gated: the request is dispatched and nothing
//!   happens to the modal until the backend confirms. A failure leaves the
//!   modal open and shows an error toast.
//!
//! Both functions run their synchronous part immediately and return the
//! follow-up as a `'static` future for `spawn_local`. Both report a confirmed
//! removal through `on_removed` so the host can drop the tender from its list.

use std::cell::Cell;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;

use crate::api::{Result, TenderActions};
use crate::notifications::Notifier;

pub const TENDER_DELETED: &str = "Тендер удален";
pub const TENDER_ARCHIVED: &str = "Тендер перенесён в архив";
pub const DELETE_FAILED: &str = "Не удалось удалить тендер";
pub const ARCHIVE_FAILED: &str = "Не удалось перенести тендер в архив";

/// Mount flag shared between a component and the futures it spawns.
///
/// Cleared in `Component::destroy`; effects that target the component check
/// it after every await point.
#[derive(Clone, Debug)]
pub struct Liveness(Rc<Cell<bool>>);

impl Liveness {
    pub fn new() -> Self {
        Self(Rc::new(Cell::new(true)))
    }

    pub fn is_alive(&self) -> bool {
        self.0.get()
    }

    pub fn end(&self) {
        self.0.set(false);
    }
}

impl Default for Liveness {
    fn default() -> Self {
        Self::new()
    }
}

type Dispatched = Pin<Box<dyn Future<Output = Result<()>>>>;

/// Optimistic delete: dispatches, then runs `close` and the success toast
/// before returning. The returned future reports the backend outcome.
pub fn delete_tender<A, N>(
    actions: &A,
    notifier: N,
    tender_id: u64,
    archive_view: bool,
    close: impl FnOnce(),
    on_removed: impl FnOnce(u64) + 'static,
) -> impl Future<Output = ()> + 'static
where
    A: TenderActions,
    N: Notifier + 'static,
{
    let dispatched: Dispatched = if archive_view {
        Box::pin(actions.delete_archived(tender_id))
    } else {
        Box::pin(actions.delete(tender_id))
    };

    close();
    notifier.success(TENDER_DELETED);

    async move {
        match dispatched.await {
            Ok(()) => on_removed(tender_id),
            Err(err) => notifier.error(&format!("{}: {}", DELETE_FAILED, err)),
        }
    }
}

/// Confirmation-gated archive: dispatches and returns a future that notifies
/// and closes only after a successful response, and closes only while the
/// component is still mounted.
pub fn archive_tender<A, N>(
    actions: &A,
    notifier: N,
    tender_id: u64,
    liveness: Liveness,
    close: impl FnOnce() + 'static,
    on_removed: impl FnOnce(u64) + 'static,
) -> impl Future<Output = ()> + 'static
where
    A: TenderActions,
    N: Notifier + 'static,
{
    let dispatched: Dispatched = Box::pin(actions.archive(tender_id));

    async move {
        match dispatched.await {
            Ok(()) => {
                notifier.success(TENDER_ARCHIVED);
                on_removed(tender_id);
                if liveness.is_alive() {
                    close();
                }
            }
            Err(err) => notifier.error(&format!("{}: {}", ARCHIVE_FAILED, err)),
        }
    }
}
