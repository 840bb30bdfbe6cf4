mod quiz;
mod scripts;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use quiz::QuizFlowView;
