#![cfg(test)]

use std::collections::{BTreeSet, HashMap, VecDeque};

use super::*;
use crate::util::error::{InvalidArgument, SizeLessThanOne};

#[derive(Debug, Clone, Default, PartialEq)]
struct Person {
    name: String,
    age: u32,
}

fn people() -> Vec<Person> {
    vec![
        Person { name: "John".into(), age: 25 },
        Person { name: "Amy".into(), age: 30 },
        Person { name: "Bob".into(), age: 40 },
    ]
}

#[test]
fn test_map() {
    assert_eq!(map(&[1, 2, 3], |x| x * 2), [2, 4, 6]);
    assert_eq!(
        map(&[1, 2, 3], |x| *x as f64),
        [1.0, 2.0, 3.0],
        "Map should be able to change the element type."
    );
    assert_eq!(
        map(&people(), |p| p.name.clone()),
        ["John", "Amy", "Bob"],
        "Map should be able to project a field out of a struct."
    );

    let empty: Vec<String> = map(&[] as &[i32], |x| x.to_string());
    assert!(empty.is_empty(), "Mapping nothing should give an empty Vec.");
}

#[test]
fn test_map_preserves_length_and_position() {
    let input = [7, -3, 0, 12, 5];
    let out = map(&input, |x| x - 1);

    assert_eq!(out.len(), input.len());
    for (i, x) in input.iter().enumerate() {
        assert_eq!(out[i], x - 1, "Element {i} should be the transform of input[{i}].");
    }
}

#[test]
fn test_filter() {
    assert_eq!(filter(&[1, 2, 3, 4, 5], |x| x % 2 == 0), [2, 4]);
    assert_eq!(
        filter(&["apple", "", "banana", "kiwi"], |s| s.len() > 4),
        ["apple", "banana"],
        "Filter should keep matching elements in their original order."
    );

    let input = [3, 1, 4, 1, 5, 9, 2, 6];
    assert_eq!(filter(&input, |_| true), input, "An always-true predicate keeps everything.");
    assert!(filter(&input, |_| false).is_empty(), "An always-false predicate keeps nothing.");
}

#[test]
fn test_filter_leaves_input_untouched() {
    let input = people();
    let over_30 = filter(&input, |p| p.age > 30);

    assert_eq!(over_30, [Person { name: "Bob".into(), age: 40 }]);
    assert_eq!(input, people(), "The input sequence shouldn't be modified by filtering.");
}

#[test]
fn test_retain_into() {
    let deque: VecDeque<i32> = (1..=6).collect();
    let odds = retain_into(deque, |x| x % 2 == 1);
    assert_eq!(odds, [1, 3, 5], "A VecDeque should come back as a VecDeque.");

    let set: BTreeSet<&str> = ["a", "bb", "ccc"].into_iter().collect();
    let long = retain_into(set, |s| s.len() > 1);
    assert_eq!(long.into_iter().collect::<Vec<_>>(), ["bb", "ccc"]);

    let map: HashMap<&str, i32> = [("one", 1), ("two", 2), ("three", 3)].into_iter().collect();
    let kept = retain_into(map, |(_, v)| *v != 2);
    assert_eq!(
        kept,
        [("one", 1), ("three", 3)].into_iter().collect::<HashMap<_, _>>(),
        "Maps iterate as (key, value) pairs and should be rebuilt as the same kind of map."
    );
}

#[test]
fn test_reduce() {
    assert_eq!(reduce(&[1, 2, 3, 4, 5], |acc, x| acc + x, 0), 15);
    assert_eq!(
        reduce(&["hello", " ", "world"], |acc, s| acc + *s, String::new()),
        "hello world",
        "Reduce should fold left to right."
    );
    assert_eq!(
        reduce(&[] as &[i32], |acc, x| acc + x, 42),
        42,
        "Reducing nothing should return the seed unchanged."
    );
    assert_eq!(
        reduce(&[1, 2, 3], |acc, x| acc * 10 + x, 0),
        123,
        "A non-commutative fold shows the traversal order."
    );
}

#[test]
fn test_each() {
    let mut seen = Vec::new();
    each(&[1, 2, 3, 4, 5], |x| seen.push(*x));
    assert_eq!(seen, [1, 2, 3, 4, 5], "Each should visit elements left to right.");

    let mut calls = 0;
    each(&[] as &[u8], |_| calls += 1);
    assert_eq!(calls, 0);
}

#[test]
fn test_each_right() {
    let mut seen = Vec::new();
    each_right(&[1, 2, 3, 4, 5], |x| seen.push(*x));
    assert_eq!(seen, [5, 4, 3, 2, 1], "EachRight should visit elements right to left.");
}

#[test]
fn test_every() {
    let numbers = [2, 4, 6, 8];
    assert!(every(&numbers, |n| n % 2 == 0));
    assert!(!every(&numbers, |n| *n > 2));
    assert!(every(&[] as &[i32], |_| false), "Every should be vacuously true when empty.");
    assert!(every(&[] as &[String], |_| false));

    let mut calls = 0;
    every(&[1, 2, 3, 4], |n| {
        calls += 1;
        *n < 2
    });
    assert_eq!(calls, 2, "Every should stop at the first failing element.");
}

#[test]
fn test_some() {
    let numbers = [1, 3, 5, 6];
    assert!(some(&numbers, |n| n % 2 == 0));
    assert!(!some(&numbers, |n| *n < 0));
    assert!(!some(&[] as &[i32], |_| true), "Some should be false when empty.");
    assert!(!some(&[] as &[Person], |_| true));

    let mut calls = 0;
    some(&[1, 2, 3, 4], |n| {
        calls += 1;
        *n == 2
    });
    assert_eq!(calls, 2, "Some should stop at the first match.");
}

#[test]
fn test_find() {
    assert_eq!(find(&[1, 2, 3, 4, 5], |x| *x > 3), (3, 4));
    assert_eq!(
        find(&[1, 2, 3, 4, 5], |x| *x > 10),
        (-1, 0),
        "No match should give the sentinel index and the default value."
    );
    assert_eq!(
        find(&people(), |p| p.name.starts_with('Z')),
        (-1, Person::default()),
        "The sentinel value should be the element type's default."
    );
    assert_eq!(
        find(&[5, 7, 7, 9], |x| *x == 7).0,
        1,
        "Find should return the lowest matching index."
    );
}

#[test]
fn test_find_entry() {
    let names = ["ann", "ben", "cat"];
    assert_eq!(find_entry(&names, |n| n.starts_with('b')), Some((1, &"ben")));
    assert_eq!(find_entry(&names, |n| n.is_empty()), None);
    assert_eq!(find_entry(&[] as &[i32], |_| true), None);
}

#[test]
fn test_chunk() {
    assert_eq!(chunk(&[1, 2, 3, 4, 5], 2), Ok(vec![vec![1, 2], vec![3, 4], vec![5]]));
    assert_eq!(
        chunk(&[1, 2, 3], 5),
        Ok(vec![vec![1, 2, 3]]),
        "A size larger than the sequence should give one group."
    );
    assert_eq!(chunk(&[1, 2, 3], 3), Ok(vec![vec![1, 2, 3]]));
    assert_eq!(chunk(&[1, 2, 3], 1), Ok(vec![vec![1], vec![2], vec![3]]));
    assert_eq!(
        chunk(&[] as &[i32], 3),
        Ok(Vec::<Vec<i32>>::new()),
        "An empty sequence should give zero groups, not an error."
    );
}

#[test]
fn test_chunk_rejects_small_sizes() {
    for size in [0, -1, isize::MIN] {
        let err = chunk(&[1, 2, 3], size).unwrap_err();
        assert_eq!(err, InvalidArgument::SizeLessThanOne(SizeLessThanOne { size }));
        assert!(err.is_size_less_than_one());
        assert_eq!(err.to_string(), "cannot be less than 1");
    }

    assert!(
        chunk(&[] as &[i32], 0).is_err(),
        "The size should be validated even when there is nothing to chunk."
    );

    let inner: SizeLessThanOne = chunk(&["x"], -5)
        .unwrap_err()
        .try_into()
        .unwrap();
    assert_eq!(inner.size, -5);
}
