use super::*;

#[test]
fn shows_keep_call_order() {
    let mut queue = ToastQueue::default();
    for n in 0..5 {
        queue.push(format!("msg {n}"), ToastKind::Info);
    }
    let messages: Vec<_> = queue.entries().iter().map(|t| t.message.as_str()).collect();
    assert_eq!(messages, vec!["msg 0", "msg 1", "msg 2", "msg 3", "msg 4"]);
}

#[test]
fn ids_are_unique_and_increasing() {
    let mut queue = ToastQueue::default();
    let a = queue.push("a", ToastKind::Success);
    let b = queue.push("b", ToastKind::Error);
    assert!(b > a);
}

#[test]
fn arm_targets_oldest_entry() {
    let mut queue = ToastQueue::default();
    assert_eq!(queue.arm(), None);
    let first = queue.push("a", ToastKind::Info);
    queue.push("b", ToastKind::Info);
    assert_eq!(queue.arm().map(|t| t.id), Some(first));
}

#[test]
fn expire_removes_oldest_once() {
    let mut queue = ToastQueue::default();
    queue.push("a", ToastKind::Info);
    queue.push("b", ToastKind::Info);
    let ticket = queue.arm().expect("armed");
    assert!(queue.expire(ticket));
    assert!(!queue.expire(ticket));
    assert_eq!(queue.entries().len(), 1);
    assert_eq!(queue.entries()[0].message, "b");
}

#[test]
fn ticket_is_stale_after_push() {
    let mut queue = ToastQueue::default();
    queue.push("a", ToastKind::Info);
    let ticket = queue.arm().expect("armed");
    queue.push("b", ToastKind::Info);
    assert!(!queue.expire(ticket));
    assert_eq!(queue.entries().len(), 2);
}

#[test]
fn dismissal_racing_timer_never_removes_another_entry() {
    let mut queue = ToastQueue::default();
    let a = queue.push("a", ToastKind::Info);
    queue.push("b", ToastKind::Info);
    let ticket = queue.arm().expect("armed");
    assert_eq!(ticket.id, a);

    assert!(queue.dismiss(a));
    assert!(!queue.expire(ticket));
    assert_eq!(queue.entries().len(), 1);
    assert_eq!(queue.entries()[0].message, "b");

    let next = queue.arm().expect("re-armed");
    assert!(queue.expire(next));
    assert!(queue.entries().is_empty());
}

#[test]
fn dismissing_unknown_id_is_noop() {
    let mut queue = ToastQueue::default();
    queue.push("a", ToastKind::Info);
    let ticket = queue.arm().expect("armed");
    assert!(!queue.dismiss(999));
    assert!(queue.expire(ticket));
}

#[test]
fn kind_classes_are_distinct() {
    assert_eq!(ToastKind::Error.class(), "toast toast--error");
    assert_ne!(ToastKind::Success.class(), ToastKind::Info.class());
}
