//! Process-wide toast notification queue.
//!
//! DESIGN
//! ======
//! `ToastQueue` is plain data so ordering and expiry rules are testable
//! without a reactive runtime. `ToastService` wraps it in a signal, is built
//! once in `App`, and is shared through context.
//!
//! One timer runs at a time. Arming it yields an `ExpiryTicket` naming the
//! oldest entry and the queue generation; every push or dismissal bumps the
//! generation, so a ticket issued before a change expires nothing and the
//! change re-arms a fresh timer. An entry is therefore removed at most once
//! and a stale timer can never remove a different entry.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use leptos::prelude::*;

/// Delay between the queue last changing and its oldest entry expiring.
pub const TOAST_TTL_MS: u32 = 4000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Success => "toast toast--success",
            Self::Error => "toast toast--error",
            Self::Info => "toast toast--info",
        }
    }

    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Success => "✓",
            Self::Error => "✕",
            Self::Info => "i",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub kind: ToastKind,
}

/// Identifies the entry a timer may remove and the queue state it was armed on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExpiryTicket {
    pub generation: u64,
    pub id: u64,
}

#[derive(Clone, Debug, Default)]
pub struct ToastQueue {
    entries: Vec<Toast>,
    next_id: u64,
    generation: u64,
}

impl ToastQueue {
    #[must_use]
    pub fn entries(&self) -> &[Toast] {
        &self.entries
    }

    /// Append a toast; returns its id.
    pub fn push(&mut self, message: impl Into<String>, kind: ToastKind) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.entries.push(Toast { id, message: message.into(), kind });
        self.generation += 1;
        id
    }

    /// Remove `id` ahead of its expiry. Returns whether anything was removed.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.entries.len();
        self.entries.retain(|t| t.id != id);
        let removed = self.entries.len() != before;
        if removed {
            self.generation += 1;
        }
        removed
    }

    /// Ticket for the oldest entry, or `None` when empty.
    #[must_use]
    pub fn arm(&self) -> Option<ExpiryTicket> {
        self.entries.first().map(|t| ExpiryTicket { generation: self.generation, id: t.id })
    }

    /// Remove the ticket's entry if the queue is unchanged since arming.
    pub fn expire(&mut self, ticket: ExpiryTicket) -> bool {
        if ticket.generation != self.generation {
            return false;
        }
        if self.entries.first().map(|t| t.id) != Some(ticket.id) {
            return false;
        }
        self.entries.remove(0);
        self.generation += 1;
        true
    }
}

/// Shared handle exposing `show` to any component.
#[derive(Clone, Copy)]
pub struct ToastService {
    queue: RwSignal<ToastQueue>,
}

impl ToastService {
    pub fn new() -> Self {
        Self { queue: RwSignal::new(ToastQueue::default()) }
    }

    /// Tracked snapshot of the current entries, oldest first.
    pub fn entries(&self) -> Vec<Toast> {
        self.queue.with(|q| q.entries().to_vec())
    }

    pub fn show(&self, message: impl Into<String>, kind: ToastKind) {
        self.queue.update(|q| {
            q.push(message, kind);
        });
        self.schedule();
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show(message, ToastKind::Success);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(message, ToastKind::Error);
    }

    pub fn info(&self, message: impl Into<String>) {
        self.show(message, ToastKind::Info);
    }

    pub fn dismiss(&self, id: u64) {
        let removed = self.queue.try_update(|q| q.dismiss(id)).unwrap_or(false);
        if removed {
            self.schedule();
        }
    }

    fn schedule(&self) {
        let Some(ticket) = self.queue.with_untracked(ToastQueue::arm) else {
            return;
        };
        #[cfg(feature = "hydrate")]
        {
            let service = *self;
            leptos::task::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(TOAST_TTL_MS).await;
                let expired = service.queue.try_update(|q| q.expire(ticket)).unwrap_or(false);
                if expired {
                    service.schedule();
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ticket;
        }
    }
}

impl Default for ToastService {
    fn default() -> Self {
        Self::new()
    }
}
