pub mod bias;
pub mod comparison;
pub mod extraction;
pub mod generating;
pub mod learning;
pub mod level_select;
pub mod mode_intro;
pub mod observation;
pub mod progress;
