use compare::Compare;
use quickcheck::{Arbitrary, Gen};

use crate::balance::Balance;
use crate::set::Set;

impl<T, C, B> Arbitrary for Set<T, C, B>
    where T: Arbitrary,
          C: 'static + Clone + Compare<T> + Default + Send,
          B: 'static + Balance + Clone + Send {

    fn arbitrary(g: &mut Gen) -> Self {
        Vec::<T>::arbitrary(g).into_iter().collect()
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        let mut items: Vec<T> = Vec::with_capacity(self.len());

        self.in_order(|item, _, count| {
            for _ in 0..count { items.push(item.clone()); }
        });

        Box::new(items.shrink().map(|items| items.into_iter().collect()))
    }
}
