//! Quantity Stepper
//!
//! Selected purchase quantity, kept in `[1, max(1, min(stock, 10))]`.

/// Most units selectable in one go
pub const MAX_PER_ORDER: u32 = 10;

pub fn max_quantity(stock: u32) -> u32 {
    stock.min(MAX_PER_ORDER).max(1)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuantityStepper {
    value: u32,
    stock: u32,
}

impl QuantityStepper {
    pub fn new(stock: u32) -> Self {
        Self { value: 1, stock }
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn max(&self) -> u32 {
        max_quantity(self.stock)
    }

    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }

    pub fn can_increment(&self) -> bool {
        self.in_stock() && self.value < self.max()
    }

    pub fn can_decrement(&self) -> bool {
        self.in_stock() && self.value > 1
    }

    pub fn increment(&mut self) {
        if self.can_increment() {
            self.value += 1;
        }
    }

    pub fn decrement(&mut self) {
        if self.can_decrement() {
            self.value -= 1;
        }
    }

    /// Apply typed input; unparseable text resets to 1
    pub fn set_from_input(&mut self, text: &str) {
        let parsed = text.trim().parse::<i64>().unwrap_or(1);
        self.value = parsed.clamp(1, i64::from(self.max())) as u32;
    }

    /// Stock changed (new product loaded); re-clamp the value
    pub fn set_stock(&mut self, stock: u32) {
        self.stock = stock;
        self.value = self.value.clamp(1, self.max());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_quantity_examples() {
        assert_eq!(max_quantity(3), 3);
        assert_eq!(max_quantity(15), 10);
        assert_eq!(max_quantity(0), 1);
    }

    #[test]
    fn test_stepper_stays_in_bounds() {
        let mut stepper = QuantityStepper::new(3);
        assert!(!stepper.can_decrement());
        for _ in 0..10 {
            stepper.increment();
        }
        assert_eq!(stepper.value(), 3);
        assert!(!stepper.can_increment());
        for _ in 0..10 {
            stepper.decrement();
        }
        assert_eq!(stepper.value(), 1);
    }

    #[test]
    fn test_out_of_stock_disables_both() {
        let mut stepper = QuantityStepper::new(0);
        assert!(!stepper.can_increment());
        assert!(!stepper.can_decrement());
        stepper.increment();
        assert_eq!(stepper.value(), 1);
    }

    #[test]
    fn test_typed_input_clamped() {
        let mut stepper = QuantityStepper::new(15);
        stepper.set_from_input("7");
        assert_eq!(stepper.value(), 7);
        stepper.set_from_input("99");
        assert_eq!(stepper.value(), 10);
        stepper.set_from_input("-4");
        assert_eq!(stepper.value(), 1);
        stepper.set_from_input("abc");
        assert_eq!(stepper.value(), 1);
    }

    #[test]
    fn test_stock_change_reclamps() {
        let mut stepper = QuantityStepper::new(10);
        stepper.set_from_input("8");
        stepper.set_stock(2);
        assert_eq!(stepper.value(), 2);
    }
}
