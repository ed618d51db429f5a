#![deny(warnings)]

/// Cursor over any iterator. Everything read since the last `ignore` stays
/// buffered, so callers can step back, peek either way or rewind to a saved
/// `pos()`.
pub struct Scanner<I: Iterator> where I::Item: Clone {
    src: I,
    buf: Vec<I::Item>,
    // items of buf consumed so far, the current one is buf[consumed - 1]
    consumed: usize,
}

impl<I> Iterator for Scanner<I> where I: Iterator, I::Item: Clone {
    type Item = I::Item;
    // At EOF the cursor stays on the last item
    fn next(&mut self) -> Option<Self::Item> {
        let item = self.lookahead()?;
        self.consumed += 1;
        Some(item)
    }
}

impl<I> Scanner<I> where I: Iterator, I::Item: Clone {
    pub fn new(source: I) -> Scanner<I> {
        Scanner { src: source, buf: Vec::new(), consumed: 0 }
    }

    /// Number of items consumed since the last `ignore`.
    pub fn pos(&self) -> usize { self.consumed }

    /// Rewind (or replay) to a position, only within what's been buffered.
    pub fn set_pos(&mut self, pos: usize) -> bool {
        if pos > self.buf.len() {
            return false;
        }
        self.consumed = pos;
        true
    }

    // the item right after the cursor, reading it from src if needed
    fn lookahead(&mut self) -> Option<I::Item> {
        if self.consumed == self.buf.len() {
            let item = self.src.next()?;
            self.buf.push(item);
        }
        self.buf.get(self.consumed).cloned()
    }

    pub fn curr(&self) -> Option<I::Item> {
        let at = self.consumed.checked_sub(1)?;
        self.buf.get(at).cloned()
    }

    pub fn prev(&mut self) -> Option<I::Item> {
        self.consumed = self.consumed.saturating_sub(1);
        self.curr()
    }

    pub fn peek(&mut self) -> Option<I::Item> {
        self.lookahead()
    }

    pub fn peek_prev(&self) -> Option<I::Item> {
        let at = self.consumed.checked_sub(2)?;
        self.buf.get(at).cloned()
    }

    pub fn view(&self) -> &[I::Item] {
        &self.buf[..self.consumed]
    }

    /// Forget what's been consumed, only buffered lookahead is kept.
    pub fn ignore(&mut self) {
        self.buf = self.buf.split_off(self.consumed);
        self.consumed = 0;
    }

    pub fn extract(&mut self) -> Vec<I::Item> {
        let items = self.view().to_vec();
        self.ignore();
        items
    }
}

impl<I> Scanner<I> where I: Iterator, I::Item: Clone + PartialEq {
    pub fn accept(&mut self, what: &I::Item) -> Option<I::Item> {
        self.accept_any(std::slice::from_ref(what))
    }

    // Consume the next item only if it's in 'any'
    pub fn accept_any(&mut self, any: &[I::Item]) -> Option<I::Item> {
        let next = self.peek().filter(|next| any.contains(next))?;
        self.consumed += 1;
        Some(next)
    }

    // Consume a run of items from 'over', true if there was any
    pub fn skip_all(&mut self, over: &[I::Item]) -> bool {
        let start = self.consumed;
        while self.accept_any(over).is_some() {}
        self.consumed > start
    }

    // Consume up to (not including) the first item in 'any', or to EOF
    pub fn until_any(&mut self, any: &[I::Item]) -> bool {
        let start = self.consumed;
        while self.peek().is_some_and(|next| !any.contains(&next)) {
            self.consumed += 1;
        }
        self.consumed > start
    }
}
