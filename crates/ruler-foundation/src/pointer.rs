//! Pointer events as delivered by the host.

use ruler_core::Point;
use smallvec::SmallVec;

pub type PointerId = u64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    /// A pointer touched down (first or additional).
    Down,
    Move,
    /// A pointer lifted (last or not).
    Up,
    /// The platform took the gesture away.
    Cancel,
}

/// One pointer sample. `uptime_ms` is the host's monotonic event time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub id: PointerId,
    pub kind: PointerEventKind,
    pub position: Point,
    pub uptime_ms: i64,
}

impl PointerEvent {
    pub fn new(kind: PointerEventKind, id: PointerId, position: Point, uptime_ms: i64) -> Self {
        Self {
            id,
            kind,
            position,
            uptime_ms,
        }
    }

    pub fn down(id: PointerId, x: f32, y: f32, uptime_ms: i64) -> Self {
        Self::new(PointerEventKind::Down, id, Point::new(x, y), uptime_ms)
    }

    pub fn moved(id: PointerId, x: f32, y: f32, uptime_ms: i64) -> Self {
        Self::new(PointerEventKind::Move, id, Point::new(x, y), uptime_ms)
    }

    pub fn up(id: PointerId, x: f32, y: f32, uptime_ms: i64) -> Self {
        Self::new(PointerEventKind::Up, id, Point::new(x, y), uptime_ms)
    }

    pub fn cancel(id: PointerId, uptime_ms: i64) -> Self {
        Self::new(PointerEventKind::Cancel, id, Point::ZERO, uptime_ms)
    }
}

/// Pointers currently pressed on a control, in press order.
#[derive(Clone, Debug, Default)]
pub struct ActivePointers {
    pointers: SmallVec<[(PointerId, Point); 2]>,
}

impl ActivePointers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.pointers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pointers.is_empty()
    }

    pub fn press(&mut self, id: PointerId, position: Point) {
        match self.pointers.iter_mut().find(|(existing, _)| *existing == id) {
            Some(entry) => entry.1 = position,
            None => self.pointers.push((id, position)),
        }
    }

    /// Updates a pressed pointer. Returns false for unknown ids.
    pub fn update(&mut self, id: PointerId, position: Point) -> bool {
        match self.pointers.iter_mut().find(|(existing, _)| *existing == id) {
            Some(entry) => {
                entry.1 = position;
                true
            }
            None => false,
        }
    }

    pub fn release(&mut self, id: PointerId) -> Option<Point> {
        let index = self.pointers.iter().position(|(existing, _)| *existing == id)?;
        Some(self.pointers.remove(index).1)
    }

    pub fn clear(&mut self) {
        self.pointers.clear();
    }

    /// The earliest pressed pointer still down.
    pub fn primary(&self) -> Option<(PointerId, Point)> {
        self.pointers.first().copied()
    }

    /// The first two pressed pointers, if two are down.
    pub fn pair(&self) -> Option<(Point, Point)> {
        match self.pointers.as_slice() {
            [(_, a), (_, b), ..] => Some((*a, *b)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracks_press_order() {
        let mut pointers = ActivePointers::new();
        pointers.press(7, Point::new(1.0, 1.0));
        pointers.press(9, Point::new(5.0, 1.0));
        assert_eq!(pointers.len(), 2);
        assert_eq!(pointers.pair(), Some((Point::new(1.0, 1.0), Point::new(5.0, 1.0))));

        assert!(pointers.update(9, Point::new(6.0, 2.0)));
        assert!(!pointers.update(3, Point::ZERO));

        assert_eq!(pointers.release(7), Some(Point::new(1.0, 1.0)));
        assert_eq!(pointers.primary(), Some((9, Point::new(6.0, 2.0))));
        assert_eq!(pointers.pair(), None);
        assert_eq!(pointers.release(7), None);
    }
}
