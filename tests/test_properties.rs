use std::cmp::Ordering;

use proptest::prelude::*;
use tclass::{
    ClassStreamAttValVector, ClassificationVector, DataType, Discrete, Schema, StreamAttVal,
    StringMap,
};

fn domain(size: usize) -> Discrete {
    Discrete::with_values((0..size).map(|i| format!("v{}", i))).unwrap()
}

proptest! {
    #[test]
    fn distance_to_self_is_zero(size in 1usize..12, a in 0usize..12, complex in any::<bool>()) {
        let a = (a % size) as f32;
        let mut dt = domain(size);
        if complex {
            dt.set_param("costmetric", "complex").unwrap();
        }
        prop_assert_eq!(dt.distance(a, a).unwrap(), 0.0);
    }

    #[test]
    fn simple_distance_is_hamming(size in 1usize..12, a in 0usize..12, b in 0usize..12) {
        let (a, b) = ((a % size) as f32, (b % size) as f32);
        let dt = domain(size);
        let expected = if a == b { 0.0 } else { 1.0 };
        prop_assert_eq!(dt.distance(a, b).unwrap(), expected);
    }

    #[test]
    fn default_complex_costs_match_simple(size in 1usize..12, a in 0usize..12, b in 0usize..12) {
        let (a, b) = ((a % size) as f32, (b % size) as f32);
        let simple = domain(size);
        let mut complex = domain(size);
        complex.set_param("costmetric", "complex").unwrap();
        prop_assert_eq!(complex.distance(a, b).unwrap(), simple.distance(a, b).unwrap());
    }

    #[test]
    fn read_inverts_print(size in 1usize..12, a in 0usize..12) {
        let a = (a % size) as f32;
        let dt = domain(size);
        let printed = dt.print(a).unwrap();
        prop_assert_eq!(dt.read(&printed).unwrap(), a);
    }

    #[test]
    fn string_map_round_trips(values in prop::collection::vec("[a-z]{1,6}", 0..20)) {
        let map = StringMap::with_values(&values);
        for i in 0..map.len() {
            let s = map.get_string(i).unwrap();
            prop_assert_eq!(map.get_int(s), Some(i));
        }
        prop_assert_eq!(map.get_int("UNKNOWN"), None);
    }

    #[test]
    fn compare_respects_ordering(size in 1usize..12, a in 0usize..12, b in 0usize..12) {
        let (a, b) = ((a % size) as f32, (b % size) as f32);
        let mut dt = domain(size);
        prop_assert_eq!(dt.compare(a, b).unwrap(), Ordering::Equal);

        dt.set_param("ordered", "true").unwrap();
        prop_assert_eq!(dt.compare(a, b).unwrap(), dt.compare(b, a).unwrap().reverse());
        prop_assert_eq!(dt.compare(a, a).unwrap(), Ordering::Equal);
    }

    #[test]
    fn paired_adds_stay_coindexed(labels in prop::collection::vec(0usize..4, 0..40)) {
        let mut schema = Schema::new();
        let class = schema.register("class", Box::new(domain(4)));
        let mut data =
            ClassStreamAttValVector::with_classification(ClassificationVector::new(class)).unwrap();

        for (i, &label) in labels.iter().enumerate() {
            data.add(&schema, StreamAttVal::new(vec![i as f32]), label as f32).unwrap();
        }

        prop_assert_eq!(data.size(), labels.len());
        prop_assert_eq!(data.class_vec().unwrap().len(), labels.len());
        for (i, (stream, label)) in data.iter().enumerate() {
            prop_assert_eq!(stream.get(0), Some(i as f32));
            prop_assert_eq!(label, Some(labels[i] as f32));
        }
    }

    #[test]
    fn binarify_maps_true_class_only(
        labels in prop::collection::vec(0usize..5, 0..40),
        true_class in 0usize..5,
    ) {
        let mut schema = Schema::new();
        let class = schema.register("class", Box::new(domain(5)));
        let mut vec = ClassificationVector::new(class);
        for &label in &labels {
            vec.add(&schema, label as f32).unwrap();
        }

        vec.binarify(&mut schema, true_class as f32).unwrap();

        prop_assert_eq!(schema.get(class).unwrap().size(), 2);
        for (old, new) in labels.iter().zip(vec.iter()) {
            let expected = if *old == true_class { tclass::TRUE_CODE } else { tclass::FALSE_CODE };
            prop_assert_eq!(new, expected);
        }
    }
}
