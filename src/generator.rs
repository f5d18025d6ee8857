use rand::Rng;

use crate::catalog::ItemType;

pub const GRID_SIZE: usize = 16;
pub const GRID_COLUMNS: usize = 4;
pub const MIN_ORDER_QUANTITY: u8 = 1;
pub const MAX_ORDER_QUANTITY: u8 = 3;

/// One shelf slot in the warehouse grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCell {
    pub index: usize,
    pub item: ItemType,
}

/// The current pick target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Order {
    pub item: ItemType,
    pub quantity: u8,
    pub collected: u8,
}

impl Order {
    pub fn new(item: ItemType, quantity: u8) -> Self {
        Self {
            item,
            quantity,
            collected: 0,
        }
    }

    pub fn remaining(&self) -> u8 {
        self.quantity.saturating_sub(self.collected)
    }

    pub fn is_fulfilled(&self) -> bool {
        self.collected >= self.quantity
    }

    /// Records one collected item. Returns true once the order is complete.
    pub fn collect(&mut self) -> bool {
        if self.collected < self.quantity {
            self.collected += 1;
        }
        self.is_fulfilled()
    }
}

/// Source of the random choices the game makes
pub trait RandomSource {
    fn next_item(&mut self) -> ItemType;
    /// Expected in `MIN_ORDER_QUANTITY..=MAX_ORDER_QUANTITY`; `generate_order` clamps anything else
    fn next_quantity(&mut self) -> u8;
}

/// Uniform sampling backed by any `rand` generator
#[derive(Debug, Clone)]
pub struct RngSource<R: Rng>(pub R);

impl<R: Rng> RandomSource for RngSource<R> {
    fn next_item(&mut self) -> ItemType {
        self.0.gen()
    }

    fn next_quantity(&mut self) -> u8 {
        self.0.gen_range(MIN_ORDER_QUANTITY..=MAX_ORDER_QUANTITY)
    }
}

/// Replays fixed sequences, wrapping around when exhausted.
/// Used by tests and scripted demos.
#[derive(Debug, Clone)]
pub struct SequenceSource {
    items: Vec<ItemType>,
    quantities: Vec<u8>,
    item_pos: usize,
    quantity_pos: usize,
}

impl SequenceSource {
    pub fn new(items: Vec<ItemType>, quantities: Vec<u8>) -> Self {
        let items = if items.is_empty() {
            ItemType::ALL.to_vec()
        } else {
            items
        };
        let quantities = quantities
            .into_iter()
            .map(|q| q.clamp(MIN_ORDER_QUANTITY, MAX_ORDER_QUANTITY))
            .collect::<Vec<_>>();
        let quantities = if quantities.is_empty() {
            vec![MIN_ORDER_QUANTITY]
        } else {
            quantities
        };

        Self {
            items,
            quantities,
            item_pos: 0,
            quantity_pos: 0,
        }
    }
}

impl RandomSource for SequenceSource {
    fn next_item(&mut self) -> ItemType {
        let item = self.items[self.item_pos % self.items.len()];
        self.item_pos += 1;
        item
    }

    fn next_quantity(&mut self) -> u8 {
        let quantity = self.quantities[self.quantity_pos % self.quantities.len()];
        self.quantity_pos += 1;
        quantity
    }
}

pub fn generate_grid<S: RandomSource + ?Sized>(source: &mut S) -> Vec<GridCell> {
    (0..GRID_SIZE)
        .map(|index| GridCell {
            index,
            item: source.next_item(),
        })
        .collect()
}

pub fn generate_order<S: RandomSource + ?Sized>(source: &mut S) -> Order {
    let item = source.next_item();
    let quantity = source
        .next_quantity()
        .clamp(MIN_ORDER_QUANTITY, MAX_ORDER_QUANTITY);
    Order::new(item, quantity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    /// Ignores the quantity contract entirely
    struct Unruly(Vec<u8>);

    impl RandomSource for Unruly {
        fn next_item(&mut self) -> ItemType {
            ItemType::Books
        }

        fn next_quantity(&mut self) -> u8 {
            self.0.remove(0)
        }
    }

    #[test]
    fn out_of_range_quantities_are_clamped() {
        let mut source = Unruly(vec![0, 7, u8::MAX]);
        let quantities: Vec<u8> = (0..3)
            .map(|_| generate_order(&mut source).quantity)
            .collect();
        assert_eq!(quantities, [1, 3, 3]);
    }

    #[test]
    fn remaining_never_underflows() {
        let order = Order {
            item: ItemType::Toys,
            quantity: 1,
            collected: 2,
        };
        assert_eq!(order.remaining(), 0);
    }

    #[test]
    fn grid_has_sixteen_indexed_cells() {
        let mut source = RngSource(StdRng::seed_from_u64(42));
        let grid = generate_grid(&mut source);

        assert_eq!(grid.len(), GRID_SIZE);
        for (i, cell) in grid.iter().enumerate() {
            assert_eq!(cell.index, i);
            assert!(ItemType::ALL.contains(&cell.item));
        }
    }

    #[test]
    fn orders_start_empty_with_quantity_in_range() {
        let mut source = RngSource(StdRng::seed_from_u64(3));
        for _ in 0..200 {
            let order = generate_order(&mut source);
            assert_eq!(order.collected, 0);
            assert!(order.collected <= order.quantity);
            assert!((MIN_ORDER_QUANTITY..=MAX_ORDER_QUANTITY).contains(&order.quantity));
        }
    }

    #[test]
    fn every_quantity_is_drawn() {
        let mut source = RngSource(StdRng::seed_from_u64(11));
        let mut seen = [false; 3];
        for _ in 0..200 {
            seen[(source.next_quantity() - 1) as usize] = true;
        }
        assert_eq!(seen, [true, true, true]);
    }

    #[test]
    fn same_seed_same_grid() {
        let a = generate_grid(&mut RngSource(StdRng::seed_from_u64(99)));
        let b = generate_grid(&mut RngSource(StdRng::seed_from_u64(99)));
        assert_eq!(a, b);
    }

    #[test]
    fn sequence_source_wraps_and_clamps() {
        let mut source = SequenceSource::new(vec![ItemType::Food, ItemType::Toys], vec![0, 2, 9]);

        assert_eq!(source.next_item(), ItemType::Food);
        assert_eq!(source.next_item(), ItemType::Toys);
        assert_eq!(source.next_item(), ItemType::Food);

        assert_eq!(source.next_quantity(), 1);
        assert_eq!(source.next_quantity(), 2);
        assert_eq!(source.next_quantity(), 3);
        assert_eq!(source.next_quantity(), 1);
    }

    #[test]
    fn order_collect_never_exceeds_quantity() {
        let mut order = Order::new(ItemType::Books, 2);
        assert!(!order.collect());
        assert_eq!(order.remaining(), 1);
        assert!(order.collect());
        assert!(order.collect());
        assert_eq!(order.collected, 2);
        assert_eq!(order.remaining(), 0);
    }
}
