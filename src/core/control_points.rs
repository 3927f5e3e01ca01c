//! Geordnete Menge der Kontrollpunkte einer Bézier-Kurve.

use super::Point;
use thiserror::Error;

/// Fehler bei indexbasiertem Zugriff auf die Kontrollpunkte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ControlPointError {
    /// Index liegt außerhalb der aktuellen Menge (kein stilles Clampen)
    #[error("Kontrollpunkt-Index {index} außerhalb des Bereichs (Anzahl: {len})")]
    IndexOutOfBounds { index: usize, len: usize },
}

/// Geordnete Kontrollpunkte. Index 0 = Kurvenanfang, letzter Index = Kurvenende.
///
/// Die Einfügereihenfolge ist die Parametrisierungsreihenfolge der Kurve.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ControlPointSet {
    points: Vec<Point>,
}

impl ControlPointSet {
    /// Erstellt eine leere Menge.
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Hängt einen Punkt am Ende an und gibt dessen Index zurück.
    pub fn add(&mut self, point: Point) -> usize {
        self.points.push(point);
        self.points.len() - 1
    }

    /// Ersetzt den Punkt an `index` und gibt den alten Wert zurück.
    pub fn replace_at(&mut self, index: usize, point: Point) -> Result<Point, ControlPointError> {
        let len = self.points.len();
        let slot = self
            .points
            .get_mut(index)
            .ok_or(ControlPointError::IndexOutOfBounds { index, len })?;
        Ok(std::mem::replace(slot, point))
    }

    /// Entfernt den Punkt an `index`; alle folgenden Indizes rücken um eins auf.
    pub fn remove_at(&mut self, index: usize) -> Result<Point, ControlPointError> {
        if index >= self.points.len() {
            return Err(ControlPointError::IndexOutOfBounds {
                index,
                len: self.points.len(),
            });
        }
        Ok(self.points.remove(index))
    }

    /// Leert die Menge.
    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Anzahl der Punkte.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Gibt `true` zurück, wenn keine Punkte vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Punkt an `index`, oder `IndexOutOfBounds`.
    pub fn at(&self, index: usize) -> Result<Point, ControlPointError> {
        self.get(index).ok_or(ControlPointError::IndexOutOfBounds {
            index,
            len: self.points.len(),
        })
    }

    /// Punkt an `index`, falls vorhanden.
    pub fn get(&self, index: usize) -> Option<Point> {
        self.points.get(index).copied()
    }

    /// Read-only Sicht auf alle Punkte in Kurvenreihenfolge.
    pub fn as_slice(&self) -> &[Point] {
        &self.points
    }

    /// Iterator über alle Punkte in Kurvenreihenfolge.
    pub fn iter(&self) -> impl Iterator<Item = Point> + '_ {
        self.points.iter().copied()
    }
}

impl FromIterator<Point> for ControlPointSet {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

impl From<Vec<Point>> for ControlPointSet {
    fn from(points: Vec<Point>) -> Self {
        Self { points }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set_of(coords: &[(f64, f64)]) -> ControlPointSet {
        coords.iter().copied().map(Point::from).collect()
    }

    #[test]
    fn test_add_appends_in_order() {
        let mut set = ControlPointSet::new();
        assert_eq!(set.add(Point::new(1.0, 1.0)), 0);
        assert_eq!(set.add(Point::new(2.0, 2.0)), 1);
        assert_eq!(set.as_slice(), &[Point::new(1.0, 1.0), Point::new(2.0, 2.0)]);
    }

    #[test]
    fn test_replace_at_returns_previous_value() {
        let mut set = set_of(&[(0.0, 0.0), (5.0, 5.0)]);
        let old = set.replace_at(1, Point::new(7.0, 8.0)).expect("Index gültig");
        assert_eq!(old, Point::new(5.0, 5.0));
        assert_eq!(set.get(1), Some(Point::new(7.0, 8.0)));
    }

    #[test]
    fn test_replace_at_out_of_bounds_fails_loudly() {
        let mut set = set_of(&[(0.0, 0.0)]);
        let err = set.replace_at(3, Point::ORIGIN).unwrap_err();
        assert_eq!(err, ControlPointError::IndexOutOfBounds { index: 3, len: 1 });
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_remove_at_shifts_following_points() {
        let mut set = set_of(&[(0.0, 0.0), (1.0, 1.0), (2.0, 2.0), (3.0, 3.0)]);
        let removed = set.remove_at(1).expect("Index gültig");
        assert_eq!(removed, Point::new(1.0, 1.0));
        assert_eq!(
            set.as_slice(),
            &[
                Point::new(0.0, 0.0),
                Point::new(2.0, 2.0),
                Point::new(3.0, 3.0)
            ]
        );
    }

    #[test]
    fn test_remove_at_out_of_bounds_keeps_set() {
        let mut set = set_of(&[(0.0, 0.0)]);
        assert!(set.remove_at(1).is_err());
        assert!(ControlPointSet::new().remove_at(0).is_err());
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_clear_and_at() {
        let mut set = set_of(&[(0.0, 0.0), (1.0, 1.0)]);
        assert_eq!(set.at(1), Ok(Point::new(1.0, 1.0)));
        set.clear();
        assert!(set.is_empty());
        assert!(set.at(0).is_err());
    }
}
