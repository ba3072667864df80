pub mod toxicity;
