use clap::ValueEnum;
use erasure::family::Fixture;
use erasure::pages::Page;

/// Args decouple of CLI arg handling requirements from the internal data structures

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[derive(ValueEnum)]
#[value(rename_all = "kebab-case")]
pub enum PageArg {
    EraseNothing,
    EraseTheBox,
    EraseTheBoxAndTheTypeOnlyReturn,
    EraseTheBoxAndTheTypeOnlyParameter,
    EraseBoxWithMultipleTypes,
    AnyEquatable,
}

impl From<PageArg> for Page {
    fn from(value: PageArg) -> Self {
        match value {
            PageArg::EraseNothing => Self::EraseNothing,
            PageArg::EraseTheBox => Self::EraseTheBox,
            PageArg::EraseTheBoxAndTheTypeOnlyReturn => Self::EraseTheBoxAndTheTypeOnlyReturn,
            PageArg::EraseTheBoxAndTheTypeOnlyParameter => Self::EraseTheBoxAndTheTypeOnlyParameter,
            PageArg::EraseBoxWithMultipleTypes => Self::EraseBoxWithMultipleTypes,
            PageArg::AnyEquatable => Self::AnyEquatable,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[derive(ValueEnum)]
#[value(rename_all = "lower")]
pub enum StrategyArg {
    Naive,
    Workaround,
    Normalized,
}

impl From<StrategyArg> for Fixture {
    fn from(value: StrategyArg) -> Self {
        match value {
            StrategyArg::Naive => Self::Naive,
            StrategyArg::Workaround => Self::Workaround,
            StrategyArg::Normalized => Self::Normalized,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[derive(ValueEnum)]
#[value(rename_all = "lower")]
pub enum FormatArg {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
mod args_tests {
    use rstest::rstest;
    use super::*;

    #[rstest]
    #[case("erase-nothing", Page::EraseNothing)]
    #[case("erase-the-box", Page::EraseTheBox)]
    #[case("erase-the-box-and-the-type-only-return", Page::EraseTheBoxAndTheTypeOnlyReturn)]
    #[case("erase-the-box-and-the-type-only-parameter", Page::EraseTheBoxAndTheTypeOnlyParameter)]
    #[case("erase-box-with-multiple-types", Page::EraseBoxWithMultipleTypes)]
    #[case("any-equatable", Page::AnyEquatable)]
    pub fn page_arg(#[case] input: &str, #[case] expected_page: Page) {
        // when
        let arg = PageArg::from_str(input, false).expect("valid");

        // then
        assert_eq!(Page::from(arg), expected_page);
    }

    #[rstest]
    #[case("naive", Fixture::Naive)]
    #[case("workaround", Fixture::Workaround)]
    #[case("normalized", Fixture::Normalized)]
    pub fn strategy_arg(#[case] input: &str, #[case] expected_fixture: Fixture) {
        // when
        let arg = StrategyArg::from_str(input, false).expect("valid");

        // then
        assert_eq!(Fixture::from(arg), expected_fixture);
    }

    #[test]
    pub fn every_page_has_an_arg() {
        // expect
        let pages: Vec<Page> = PageArg::value_variants().iter().map(|arg| Page::from(*arg)).collect();
        assert_eq!(pages, Page::ALL.to_vec());
    }
}
