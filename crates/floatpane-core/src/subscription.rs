//! Scoped ownership of gesture listeners.
//!
//! Move/end listeners must exist only while a gesture is active. A
//! [`Subscription`] attaches them when acquired and detaches them exactly
//! once: on [`Subscription::release`], or on drop if the owner goes away
//! mid-gesture.

use tracing::trace;

/// Something that can register and unregister gesture listeners.
pub trait ListenerHost {
    /// Register move/end listeners.
    fn attach(&mut self);

    /// Unregister move/end listeners.
    fn detach(&mut self);
}

/// RAII handle over an attached [`ListenerHost`].
#[derive(Debug)]
pub struct Subscription<H: ListenerHost> {
    host: Option<H>,
}

impl<H: ListenerHost> Subscription<H> {
    /// Attach `host` and return a handle that detaches it later.
    #[must_use = "dropping the subscription detaches the listeners immediately"]
    pub fn acquire(mut host: H) -> Self {
        host.attach();
        trace!("listeners attached");
        Self { host: Some(host) }
    }

    /// Whether the listeners are still attached.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.host.is_some()
    }

    /// Detach now and hand the host back.
    pub fn release(mut self) -> Option<H> {
        self.detach_host()
    }

    fn detach_host(&mut self) -> Option<H> {
        let mut host = self.host.take()?;
        host.detach();
        trace!("listeners detached");
        Some(host)
    }
}

impl<H: ListenerHost> Drop for Subscription<H> {
    fn drop(&mut self) {
        self.detach_host();
    }
}
