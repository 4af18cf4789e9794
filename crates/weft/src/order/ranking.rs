//! Composable node rankings.
//!
//! A [`Ranking`] is a chain of comparison steps over node indexes. Each step is either a key
//! extraction (ascending or descending) or a raw comparator; later steps only break ties left
//! by earlier ones. Every node order in this crate is built by composing steps here.

use std::cmp::Ordering;
use weft_graphlib::Network;

type Step<'a> = Box<dyn Fn(usize, usize) -> Ordering + 'a>;

#[derive(Default)]
pub struct Ranking<'a> {
    steps: Vec<Step<'a>>,
}

impl<'a> Ranking<'a> {
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    pub fn by<K: Ord>(self, key: impl Fn(usize) -> K + 'a) -> Self {
        self.by_cmp(move |a, b| key(a).cmp(&key(b)))
    }

    pub fn by_desc<K: Ord>(self, key: impl Fn(usize) -> K + 'a) -> Self {
        self.by_cmp(move |a, b| key(b).cmp(&key(a)))
    }

    pub fn by_cmp(mut self, cmp: impl Fn(usize, usize) -> Ordering + 'a) -> Self {
        self.steps.push(Box::new(cmp));
        self
    }

    /// Node natural order: name, then id.
    pub fn then_natural(self, net: &'a Network) -> Self {
        self.by_cmp(move |a, b| net.node_at(a).cmp(net.node_at(b)))
    }

    pub fn compare(&self, a: usize, b: usize) -> Ordering {
        if a == b {
            return Ordering::Equal;
        }
        for step in &self.steps {
            let ord = step(a, b);
            if ord != Ordering::Equal {
                return ord;
            }
        }
        Ordering::Equal
    }

    pub fn sort(&self, ixs: &mut [usize]) {
        ixs.sort_by(|&a, &b| self.compare(a, b));
    }

    pub fn sorted(&self, mut ixs: Vec<usize>) -> Vec<usize> {
        self.sort(&mut ixs);
        ixs
    }
}
