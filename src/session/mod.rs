pub mod prefetch;

pub use prefetch::{
    PracticeScreen,
    ScreenState,
};
