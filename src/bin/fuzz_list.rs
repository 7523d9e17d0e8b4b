//! AFL fuzz harness for the array list and its cursors
//!
//! Every operation is replayed against a `Vec` model. After each step the
//! list contents must match the model, and protocol violations must fail
//! without changing anything.

use afl::fuzz;
use primseq::Error;
use primseq::list::ArrayList;

/// Operation types the fuzzer can generate
#[derive(Debug, Clone, Copy)]
enum FuzzOp {
    Insert { pos_frac: u8, value: i8 },
    Remove { pos_frac: u8 },
    Set { pos_frac: u8, value: i8 },
    /// Open a cursor at a position, or drop the current one
    Cursor { pos_frac: u8 },
    Next,
    Previous,
    CursorRemove,
    CursorSet { value: i8 },
    CursorAdd { value: i8 },
}

impl FuzzOp {
    fn from_bytes(bytes: &[u8]) -> Option<(FuzzOp, &[u8])> {
        if bytes.is_empty() {
            return None;
        }

        let op_type = bytes[0] % 9;
        let rest = &bytes[1..];

        return match op_type {
            0 if rest.len() >= 2 => Some((FuzzOp::Insert { pos_frac: rest[0], value: rest[1] as i8 }, &rest[2..])),
            1 if !rest.is_empty() => Some((FuzzOp::Remove { pos_frac: rest[0] }, &rest[1..])),
            2 if rest.len() >= 2 => Some((FuzzOp::Set { pos_frac: rest[0], value: rest[1] as i8 }, &rest[2..])),
            3 if !rest.is_empty() => Some((FuzzOp::Cursor { pos_frac: rest[0] }, &rest[1..])),
            4 => Some((FuzzOp::Next, rest)),
            5 => Some((FuzzOp::Previous, rest)),
            6 => Some((FuzzOp::CursorRemove, rest)),
            7 if !rest.is_empty() => Some((FuzzOp::CursorSet { value: rest[0] as i8 }, &rest[1..])),
            8 if !rest.is_empty() => Some((FuzzOp::CursorAdd { value: rest[0] as i8 }, &rest[1..])),
            _ => None,
        };
    }
}

/// Map a fraction byte onto `0..=bound`.
fn position(pos_frac: u8, bound: usize) -> usize {
    return (pos_frac as usize * bound / 255).min(bound);
}

/// Model-side cursor state: next index and the slot `remove`/`set` act on.
struct ModelCursor {
    next: usize,
    last: Option<usize>,
}

fn main() {
    fuzz!(|data: &[u8]| {
        let mut list = ArrayList::<i32>::with_capacity(1);
        let mut model: Vec<i32> = Vec::new();
        let mut cursor = None;
        let mut state = ModelCursor { next: 0, last: None };
        let mut remaining = data;

        while let Some((op, rest)) = FuzzOp::from_bytes(remaining) {
            remaining = rest;

            match op {
                FuzzOp::Insert { pos_frac, value } => {
                    let index = position(pos_frac, model.len());
                    list.insert_at(index, value as i32).unwrap();
                    model.insert(index, value as i32);
                    // Structural change from outside stales the cursor
                    if let Some(c) = cursor.as_mut() {
                        assert!(matches!(c.next(&list), Err(Error::ConcurrentModification { .. })));
                        cursor = None;
                    }
                }

                FuzzOp::Remove { pos_frac } => {
                    if model.is_empty() {
                        assert!(matches!(list.remove_at(0), Err(Error::IndexOutOfRange { .. })));
                        continue;
                    }
                    let index = position(pos_frac, model.len() - 1);
                    assert_eq!(list.remove_at(index).unwrap(), model.remove(index));
                    if let Some(c) = cursor.as_mut() {
                        assert!(matches!(c.previous(&list), Err(Error::ConcurrentModification { .. })));
                        cursor = None;
                    }
                }

                FuzzOp::Set { pos_frac, value } => {
                    if model.is_empty() {
                        assert!(list.set(0, value as i32).is_err());
                        continue;
                    }
                    let index = position(pos_frac, model.len() - 1);
                    let previous = std::mem::replace(&mut model[index], value as i32);
                    assert_eq!(list.set(index, value as i32).unwrap(), previous);
                }

                FuzzOp::Cursor { pos_frac } => {
                    if cursor.is_some() {
                        cursor = None;
                        continue;
                    }
                    let index = position(pos_frac, model.len());
                    cursor = Some(list.cursor(index).unwrap());
                    state = ModelCursor { next: index, last: None };
                    assert!(list.cursor(model.len() + 1).is_err());
                }

                FuzzOp::Next => {
                    let Some(c) = cursor.as_mut() else { continue };
                    let result = c.next(&list);
                    if state.next < model.len() {
                        assert_eq!(result, Ok(model[state.next]));
                        state.last = Some(state.next);
                        state.next += 1;
                    } else {
                        assert_eq!(result, Err(Error::NoSuchElement));
                    }
                }

                FuzzOp::Previous => {
                    let Some(c) = cursor.as_mut() else { continue };
                    let result = c.previous(&list);
                    if state.next > 0 {
                        state.next -= 1;
                        assert_eq!(result, Ok(model[state.next]));
                        state.last = Some(state.next);
                    } else {
                        assert_eq!(result, Err(Error::NoSuchElement));
                    }
                }

                FuzzOp::CursorRemove => {
                    let Some(c) = cursor.as_mut() else { continue };
                    let result = c.remove(&mut list);
                    match state.last.take() {
                        Some(index) => {
                            assert_eq!(result, Ok(model.remove(index)));
                            state.next = index;
                        }
                        None => assert!(matches!(result, Err(Error::IllegalState(_)))),
                    }
                }

                FuzzOp::CursorSet { value } => {
                    let Some(c) = cursor.as_mut() else { continue };
                    let result = c.set(&mut list, value as i32);
                    match state.last {
                        Some(index) => assert_eq!(result, Ok(std::mem::replace(&mut model[index], value as i32))),
                        None => assert!(matches!(result, Err(Error::IllegalState(_)))),
                    }
                }

                FuzzOp::CursorAdd { value } => {
                    let Some(c) = cursor.as_mut() else { continue };
                    c.add(&mut list, value as i32).unwrap();
                    model.insert(state.next, value as i32);
                    state.next += 1;
                    state.last = None;
                }
            }

            assert_eq!(list.as_slice(), model.as_slice(), "list diverged from model after {:?}", op);
            if let Some(c) = cursor.as_ref() {
                assert_eq!(c.next_index(), state.next);
            }
        }
    });
}
