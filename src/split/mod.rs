pub(crate) mod segmenter;
