//! Process-wide key subscription registry.
//!
//! Components register handlers against the single keyboard event
//! source and get back a disposer id; every id acquired at activation
//! must be released at teardown. `unsubscribe` is idempotent, so a
//! double teardown is harmless and no handler can fire after release.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// How a subscription matches incoming key events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyBinding {
    /// Exact key with no modifiers held.
    Plain(KeyCode),
    /// Shortcut chord: the key with Ctrl held.
    Shortcut(KeyCode),
    /// Any printable character without Ctrl/Alt. Key events that carry
    /// no character never match.
    AnyPrintable,
}

impl KeyBinding {
    fn matches(self, key: &KeyEvent) -> bool {
        match self {
            KeyBinding::Plain(code) => key.code == code && key.modifiers == KeyModifiers::NONE,
            KeyBinding::Shortcut(code) => {
                key.code == code && key.modifiers.contains(KeyModifiers::CONTROL)
            }
            KeyBinding::AnyPrintable => {
                matches!(key.code, KeyCode::Char(_))
                    && !key
                        .modifiers
                        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
            }
        }
    }
}

/// Disposer handle returned by [`KeyRouter::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionId(u64);

struct Subscription<A> {
    id: SubscriptionId,
    binding: KeyBinding,
    action: A,
}

/// The registry itself, owned by the application root.
pub struct KeyRouter<A> {
    subscriptions: Vec<Subscription<A>>,
    next_id: u64,
}

impl<A: Copy> KeyRouter<A> {
    pub fn new() -> Self {
        Self {
            subscriptions: Vec::new(),
            next_id: 0,
        }
    }

    pub fn subscribe(&mut self, binding: KeyBinding, action: A) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscriptions.push(Subscription {
            id,
            binding,
            action,
        });
        id
    }

    /// Release a subscription. Unknown or already-released ids are a
    /// no-op.
    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        self.subscriptions.retain(|s| s.id != id);
    }

    /// Resolve a key event to the first matching subscription's action,
    /// in registration order. Specific bindings should therefore be
    /// registered before the printable fallback.
    pub fn dispatch(&self, key: &KeyEvent) -> Option<A> {
        self.subscriptions
            .iter()
            .find(|s| s.binding.matches(key))
            .map(|s| s.action)
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscriptions.len()
    }
}

impl<A: Copy> Default for KeyRouter<A> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::CONTROL)
    }

    #[test]
    fn dispatch_respects_bindings() {
        let mut router: KeyRouter<u8> = KeyRouter::new();
        router.subscribe(KeyBinding::Shortcut(KeyCode::Char('f')), 1);
        router.subscribe(KeyBinding::Plain(KeyCode::Up), 2);
        router.subscribe(KeyBinding::AnyPrintable, 3);

        assert_eq!(router.dispatch(&ctrl(KeyCode::Char('f'))), Some(1));
        assert_eq!(router.dispatch(&key(KeyCode::Up)), Some(2));
        assert_eq!(router.dispatch(&key(KeyCode::Char('x'))), Some(3));
        // Plain binding does not fire with modifiers held.
        assert_eq!(router.dispatch(&ctrl(KeyCode::Up)), None);
    }

    #[test]
    fn printable_fallback_ignores_non_character_keys() {
        let mut router: KeyRouter<u8> = KeyRouter::new();
        router.subscribe(KeyBinding::AnyPrintable, 1);

        assert_eq!(router.dispatch(&key(KeyCode::F(5))), None);
        assert_eq!(router.dispatch(&key(KeyCode::Home)), None);
        assert_eq!(router.dispatch(&ctrl(KeyCode::Char('x'))), None);
        assert_eq!(router.dispatch(&key(KeyCode::Char('x'))), Some(1));
    }

    #[test]
    fn unsubscribe_is_idempotent_and_complete() {
        let mut router: KeyRouter<u8> = KeyRouter::new();
        let a = router.subscribe(KeyBinding::Plain(KeyCode::Up), 1);
        let b = router.subscribe(KeyBinding::Plain(KeyCode::Down), 2);
        assert_eq!(router.subscriber_count(), 2);

        router.unsubscribe(a);
        router.unsubscribe(a);
        router.unsubscribe(b);
        assert_eq!(router.subscriber_count(), 0);
        assert_eq!(router.dispatch(&key(KeyCode::Down)), None);
    }

    #[test]
    fn registration_order_wins_over_the_fallback() {
        let mut router: KeyRouter<u8> = KeyRouter::new();
        router.subscribe(KeyBinding::Shortcut(KeyCode::Char('f')), 1);
        router.subscribe(KeyBinding::AnyPrintable, 2);

        // Ctrl+F is excluded from the fallback by its modifier, and the
        // shortcut wins by order anyway.
        assert_eq!(router.dispatch(&ctrl(KeyCode::Char('f'))), Some(1));
        assert_eq!(router.dispatch(&key(KeyCode::Char('f'))), Some(2));
    }
}
