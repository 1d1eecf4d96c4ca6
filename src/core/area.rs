use crate::domain::model::{Number, Rectangle};

/// Returns the area of a rectangle. Without a width the shape is a square
/// and the height is used for both sides.
pub fn area_of_rectangle(height: Number, width: Option<Number>) -> Number {
    let rectangle = match width {
        Some(width) => Rectangle::new(height, width),
        None => Rectangle::square(height),
    };
    rectangle.area()
}

impl Rectangle {
    pub fn area(&self) -> Number {
        self.height * self.width
    }
}
