// This file is now an example of how to use the `thorax_vision` library.
// The main library entry point is `src/lib.rs`.

fn main() {
    println!("Thorax Vision Labeling Engine - Example Runner");
    // In a real application, you would load a segmentation and a reader
    // point table with your I/O collaborator of choice, then run the
    // pipeline here.
    //
    // Example:
    // let config = thorax_vision::PipelineConfig::default();
    // let pipeline = thorax_vision::LabelingPipeline::new(config);
    // let mut features = pipeline.seed_feature_table(&patch_labels)?;
    // let report = pipeline.apply(&volume, &mut features, &points);
    // println!("Report: {:?}", report);
}
