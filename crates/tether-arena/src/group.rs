//! Fused lifetime groups.
//!
//! A [`FuseGroup`] strongly holds the record stores of every arena fused
//! into it, so the group's memory is released as one unit when the last
//! handle into the group drops. Groups merge union-find style: the donor
//! root keeps a forwarding link to the surviving root, so handles issued
//! before the fuse still reach (and keep alive) the merged group.

use std::cell::RefCell;
use std::rc::Rc;

use crate::store::RecordStore;

pub(crate) struct FuseGroup {
    /// Stores owned by this group. Empty once the group has been merged
    /// into another.
    stores: RefCell<Vec<Rc<RefCell<RecordStore>>>>,
    /// Set when this group was absorbed by another. Keeps the surviving
    /// root alive on behalf of handles that still point here.
    merged_into: RefCell<Option<Rc<FuseGroup>>>,
}

impl FuseGroup {
    pub(crate) fn new(store: Rc<RefCell<RecordStore>>) -> Rc<Self> {
        Rc::new(Self {
            stores: RefCell::new(vec![store]),
            merged_into: RefCell::new(None),
        })
    }

    /// Follow forwarding links to the surviving root of this group.
    pub(crate) fn root(this: &Rc<FuseGroup>) -> Rc<FuseGroup> {
        let mut current = Rc::clone(this);
        loop {
            let next = current.merged_into.borrow().clone();
            match next {
                Some(parent) => current = parent,
                None => return current,
            }
        }
    }

    /// Merge `other` into `self`. Both must be roots, and distinct.
    pub(crate) fn absorb(self: &Rc<Self>, other: &Rc<Self>) {
        debug_assert!(!Rc::ptr_eq(self, other));
        debug_assert!(self.merged_into.borrow().is_none());
        debug_assert!(other.merged_into.borrow().is_none());
        let mut donated = other.stores.borrow_mut();
        self.stores.borrow_mut().append(&mut *donated);
        drop(donated);
        *other.merged_into.borrow_mut() = Some(Rc::clone(self));
    }
}
