use std::fmt::{Display, Formatter};
use crate::boxes::any_pack::AnyPack;
use crate::boxes::any_pair::AnyPair;
use crate::boxes::any_unpack::AnyUnpack;
use crate::boxes::samples::{AnotherIntBox, IntBox, IntIntBox, IntStringBox, StringBox};
use crate::boxes::wrapped::WrappedBox;
use crate::boxes::{Pack, PackError, Receipt, Unpack, UnpackPair};
use crate::family::Fixture;
use crate::matrix::ComparisonMatrix;
use crate::opaque::{erase, Erased};

/// The demonstrations, in reading order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    EraseNothing,
    EraseTheBox,
    EraseTheBoxAndTheTypeOnlyReturn,
    EraseTheBoxAndTheTypeOnlyParameter,
    EraseBoxWithMultipleTypes,
    AnyEquatable,
}

impl Page {
    pub const ALL: [Page; 6] = [
        Page::EraseNothing,
        Page::EraseTheBox,
        Page::EraseTheBoxAndTheTypeOnlyReturn,
        Page::EraseTheBoxAndTheTypeOnlyParameter,
        Page::EraseBoxWithMultipleTypes,
        Page::AnyEquatable,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Page::EraseNothing => "Erasing nothing",
            Page::EraseTheBox => "Erasing the box but keeping the internal type",
            Page::EraseTheBoxAndTheTypeOnlyReturn => "Erasing the box and the internal type",
            Page::EraseTheBoxAndTheTypeOnlyParameter => "Erasing the box and the internal type with dynamic cast of parameters",
            Page::EraseBoxWithMultipleTypes => "Erasing the box with multiple types",
            Page::AnyEquatable => "Any equatable",
        }
    }

    pub fn render(&self) -> Report {
        let lines = match self {
            Page::EraseNothing => erase_nothing(),
            Page::EraseTheBox => erase_the_box(),
            Page::EraseTheBoxAndTheTypeOnlyReturn => erase_the_box_and_the_type_only_return(),
            Page::EraseTheBoxAndTheTypeOnlyParameter => erase_the_box_and_the_type_only_parameter(),
            Page::EraseBoxWithMultipleTypes => erase_box_with_multiple_types(),
            Page::AnyEquatable => any_equatable(),
        };

        Report { title: self.title(), lines }
    }
}

/// The console output of a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub title: &'static str,
    pub lines: Vec<String>,
}

impl Display for Report {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for line in self.lines.iter() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

fn erase_nothing() -> Vec<String> {
    let boxes = vec![
        WrappedBox::new(IntBox),
        WrappedBox::new(IntBox),
    ];

    unpacked(boxes.iter())
}

fn erase_the_box() -> Vec<String> {
    let boxes: Vec<AnyUnpack<i32>> = vec![
        AnyUnpack::new(IntBox),
        AnyUnpack::new(IntBox),
        AnyUnpack::new(AnotherIntBox),
    ];

    unpacked(boxes.iter())
}

fn erase_the_box_and_the_type_only_return() -> Vec<String> {
    let boxes: Vec<AnyUnpack<Erased>> = vec![
        AnyUnpack::erasing(IntBox),
        AnyUnpack::erasing(AnotherIntBox),
        AnyUnpack::erasing(StringBox),
    ];

    unpacked(boxes.iter())
}

fn erase_the_box_and_the_type_only_parameter() -> Vec<String> {
    let boxes: Vec<AnyPack<Erased>> = vec![
        AnyPack::erasing(IntBox),
        AnyPack::erasing(AnotherIntBox),
        AnyPack::erasing(StringBox),
    ];

    let values: Vec<Erased> = vec![
        erase(1_i32),
        erase(2_i32),
        erase("Hello".to_string()),
        // the first box only packs integers
        erase("Hello".to_string()),
    ];

    let targets = boxes.iter().chain(boxes.first());

    targets.zip(values)
        .map(|(target, value)| packed(target.pack(value)))
        .collect()
}

fn erase_box_with_multiple_types() -> Vec<String> {
    let preserving: Vec<AnyPair<i32, i32>> = vec![
        AnyPair::new(IntIntBox),
        AnyPair::new(IntIntBox),
    ];

    let erasing: Vec<AnyPair<Erased, Erased>> = vec![
        AnyPair::erasing(IntIntBox),
        AnyPair::erasing(IntStringBox),
    ];

    let mut lines = unpacked_pairs(preserving.iter());
    lines.extend(unpacked_pairs(erasing.iter()));
    lines
}

fn any_equatable() -> Vec<String> {
    Fixture::ALL.iter()
        .enumerate()
        .flat_map(|(index, fixture)| {
            let matrix = ComparisonMatrix::of(&fixture.boxes());

            let separator = (index > 0).then(String::new);
            let heading = format!("{}:", fixture.title());
            let rows = matrix.to_string().lines().map(str::to_string).collect::<Vec<_>>();

            separator.into_iter()
                .chain(std::iter::once(heading))
                .chain(rows)
        })
        .collect()
}

fn unpacked<'a, B, I>(boxes: I) -> Vec<String>
where
    B: Unpack + 'a,
    B::Inside: std::fmt::Debug,
    I: Iterator<Item = &'a B>,
{
    boxes.map(|target| format!("unpacked {:?}", target.unpack()))
        .collect()
}

fn unpacked_pairs<'a, P, I>(boxes: I) -> Vec<String>
where
    P: UnpackPair + 'a,
    P::First: std::fmt::Debug,
    P::Second: std::fmt::Debug,
    I: Iterator<Item = &'a P>,
{
    boxes.map(|target| format!("unpacked {:?} and {:?}", target.unpack_first(), target.unpack_second()))
        .collect()
}

fn packed(result: Result<Receipt, PackError>) -> String {
    match result {
        Ok(receipt) => receipt.to_string(),
        Err(_) => "FAIL".to_string(),
    }
}
