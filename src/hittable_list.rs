use crate::prelude::*;

/// Flat collection scanned linearly on every query.
#[derive(Default)]
pub struct HittableList {
    pub objects: Vec<Box<dyn Hittable>>,
}

impl HittableList {
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
        }
    }

    pub fn new_with(object: impl Hittable + 'static) -> Self {
        let mut list = Self::new();
        list.add(object);
        list
    }

    pub fn add(&mut self, object: impl Hittable + 'static) {
        self.objects.push(Box::new(object));
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl Hittable for HittableList {
    fn hit(&self, r: &Ray) -> HitRecord<'_> {
        self.objects
            .iter()
            .fold(HitRecord::miss(), |closest, object| closest.closer(object.hit(r)))
    }

    /// Panics on an empty list; an empty scene is a construction bug.
    fn bounds(&self) -> Aabb {
        let mut objects = self.objects.iter();
        let first = match objects.next() {
            Some(first) => first.bounds(),
            None => panic!("bounds requested for an empty hittable list"),
        };
        objects.fold(first, |acc, object| Aabb::wraps(&acc, &object.bounds()))
    }
}
