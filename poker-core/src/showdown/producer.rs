use super::config::EnumerationConfig;
use super::queue::BoundedQueue;
use log::debug;
use std::ops::ControlFlow;

/// One showdown as universe indices: hero hole cards, the five board cards, opponent hole cards.
pub type Tuple = [u8; 9];

/// Every `K` sized subset of positions `0..n`, as ascending arrays, in colexicographic order:
/// {0,1}, {0,2}, {1,2}, {0,3}, ... The last position moves slowest.
#[derive(Debug, Clone)]
pub struct Colex<const K: usize> {
    n: usize,
    c: [usize; K],
    done: bool,
}

impl<const K: usize> Colex<K> {
    pub fn new(n: usize) -> Self {
        let mut c = [0; K];
        for (j, slot) in c.iter_mut().enumerate() {
            *slot = j;
        }
        Self {
            n,
            c,
            done: K == 0 || K > n,
        }
    }
}

impl<const K: usize> Iterator for Colex<K> {
    type Item = [usize; K];

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let current = self.c;
        // Reset the run of consecutive positions at the bottom, then bump the first one free
        // to move.
        let mut j = 0;
        while j + 1 < K && self.c[j] + 1 == self.c[j + 1] {
            self.c[j] = j;
            j += 1;
        }
        self.c[j] += 1;
        self.done = self.c[K - 1] >= self.n;
        Some(current)
    }
}

/// Walk every (hero, board, opponent) deal over `deck` and hand `f` the ones belonging to
/// stripe `index` of `stripes`.
///
/// Every stripe walks the whole hero and board space. Only the innermost opponent loop is
/// split: a counter runs over every opponent deal in walk order and deal `k` belongs to stripe
/// `k % stripes`. Each deal therefore lands in exactly one stripe. `deck` must be ascending;
/// deals come out in [`Colex`] order of the remaining cards at each level.
pub fn for_each_striped<F>(deck: &[u8], index: usize, stripes: usize, mut f: F) -> ControlFlow<()>
where
    F: FnMut(Tuple) -> ControlFlow<()>,
{
    let stripes = stripes.max(1) as u64;
    let index = index as u64;
    let mut counter: u64 = 0;
    for [h0, h1] in Colex::<2>::new(deck.len()) {
        let hero = [deck[h0], deck[h1]];
        let rest: Vec<u8> = deck.iter().copied().filter(|c| !hero.contains(c)).collect();
        for positions in Colex::<5>::new(rest.len()) {
            let board = positions.map(|p| rest[p]);
            let pool: Vec<u8> = rest.iter().copied().filter(|c| !board.contains(c)).collect();
            for [o0, o1] in Colex::<2>::new(pool.len()) {
                let mine = counter % stripes == index;
                counter += 1;
                if !mine {
                    continue;
                }
                let tuple = [
                    hero[0], hero[1], board[0], board[1], board[2], board[3], board[4], pool[o0],
                    pool[o1],
                ];
                if f(tuple).is_break() {
                    return ControlFlow::Break(());
                }
            }
        }
    }
    ControlFlow::Continue(())
}

/// Feeds one stripe of the space into the queue.
pub struct Producer<'a> {
    index: usize,
    config: &'a EnumerationConfig,
    queue: &'a BoundedQueue<Tuple>,
}

impl<'a> Producer<'a> {
    pub fn new(
        index: usize,
        config: &'a EnumerationConfig,
        queue: &'a BoundedQueue<Tuple>,
    ) -> Self {
        Self {
            index,
            config,
            queue,
        }
    }

    /// Push every tuple of this producer's stripe. Returns how many were pushed. Stops early
    /// when the queue is cancelled or closed.
    pub fn run(&self) -> u64 {
        debug!("producer {} starting", self.index);
        let mut emitted = 0;
        let flow = for_each_striped(
            self.config.deck(),
            self.index,
            self.config.producers(),
            |tuple| match self.queue.push(tuple) {
                Ok(()) => {
                    emitted += 1;
                    ControlFlow::Continue(())
                }
                Err(_) => ControlFlow::Break(()),
            },
        );
        match flow {
            ControlFlow::Continue(()) => {
                debug!("producer {} done, {} tuples", self.index, emitted)
            }
            ControlFlow::Break(()) => {
                debug!("producer {} stopped after {} tuples", self.index, emitted)
            }
        }
        emitted
    }
}
