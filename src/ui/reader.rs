// Reader surface widgets: anchored focus word, progress bar and the panels around them

pub mod view;
