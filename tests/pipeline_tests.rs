use eyre::Result;
use rehashplot::chart::BAR_COLOR;
use rehashplot::prelude::*;
use std::path::Path;

const CSV: &str = "insert size,rehash rounds,total rehash,average per bucket,percent rehashed buckets,load factor
100,2,10,0.5,12.5,0.42
200,5,31,0.7,20.0,0.47
300,3,18,0.6,17.5,0.45
";

fn settings_for(input: &Path, output: &Path) -> Settings {
    let mut settings = Settings::default();
    settings.paths.input = input.to_str().unwrap().to_string();
    settings.paths.output = output.to_str().unwrap().to_string();
    settings.chart.show = false;
    settings
}

#[test]
fn test_load_file_preserves_rows() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let input = dir.path().join("rehash_sizes.csv");
    std::fs::write(&input, CSV)?;

    let data = read_rehash_sizes(&input)?;

    assert_eq!(data.insert_sizes(), vec![100, 200, 300]);
    assert_eq!(data.rehash_rounds(), vec![2, 5, 3]);
    Ok(())
}

#[test]
fn test_render_is_deterministic() -> Result<()> {
    let data = read_rehash_sizes_from_reader(CSV.as_bytes())?;
    let chart = BarChart::from_data(&data);

    let first = chart.render((700, 550))?;
    let second = chart.render((700, 550))?;

    assert_eq!(first.width, 700);
    assert_eq!(first.height, 550);
    assert_eq!(first.pixels.len(), 700 * 550 * 3);
    assert_eq!(first, second);
    Ok(())
}

#[test]
fn test_render_draws_bars_in_order() -> Result<()> {
    let data = RehashData::from(vec![(100, 2), (200, 5), (300, 3)]);
    let rendered = BarChart::from_data(&data).render((700, 550))?;
    let bar_color = (BAR_COLOR.0, BAR_COLOR.1, BAR_COLOR.2);
    let white = (255, 255, 255);

    assert_eq!(rendered.bar_areas.len(), 3);
    let mut previous_right = 0;
    for &((left, top), (right, bottom)) in &rendered.bar_areas {
        assert!(left > previous_right, "bars are not left to right");
        assert!(top < bottom);
        previous_right = right;

        let center = ((left + right) / 2) as u32;
        let middle = ((top + bottom) / 2) as u32;
        assert_eq!(rendered.pixel(center, middle), Some(bar_color));
        assert_eq!(rendered.pixel(center, (top + 2) as u32), Some(bar_color));
        assert_eq!(rendered.pixel(center, (top - 3) as u32), Some(white));
    }

    let tops: Vec<i32> = rendered.bar_areas.iter().map(|(ul, _)| ul.1).collect();
    assert!(tops[1] < tops[0], "bar of height 5 is not above bar of height 2");
    assert!(tops[1] < tops[2], "bar of height 5 is not above bar of height 3");
    assert!(tops[2] < tops[0], "bar of height 3 is not above bar of height 2");

    // The legend swatch is the only bar colored area outside the bars
    let inside_bar = |x: i32, y: i32| {
        rendered
            .bar_areas
            .iter()
            .any(|&((l, t), (r, b))| x >= l && x <= r && y >= t && y <= b)
    };
    let mut legend_pixels = 0;
    for y in 0..rendered.height {
        for x in 0..rendered.width {
            if rendered.pixel(x, y) == Some(bar_color) && !inside_bar(x as i32, y as i32) {
                legend_pixels += 1;
            }
        }
    }
    assert!(legend_pixels > 0, "legend swatch was not drawn");
    Ok(())
}

#[test]
fn test_render_empty_data() -> Result<()> {
    let chart = BarChart::from_data(&RehashData::default());
    let rendered = chart.render((350, 275))?;

    assert!(chart.bars().is_empty());
    assert_eq!(rendered.pixels.len(), 350 * 275 * 3);
    Ok(())
}

#[test]
fn test_pipeline_writes_and_overwrites_png() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let input = dir.path().join("rehash_sizes.csv");
    let output = dir.path().join("rehash_rds.png");
    std::fs::write(&input, CSV)?;
    let settings = settings_for(&input, &output);

    run_with(&settings)?;
    let first = std::fs::read(&output)?;
    run_with(&settings)?;
    let second = std::fs::read(&output)?;

    assert_eq!(first, second);
    let decoded = image::load_from_memory(&second)?;
    assert_eq!((decoded.width(), decoded.height()), (700, 550));
    Ok(())
}

#[test]
fn test_pipeline_schema_error_writes_nothing() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let input = dir.path().join("rehash_sizes.csv");
    let output = dir.path().join("rehash_rds.png");
    std::fs::write(&input, "insert size,total rehash\n100,10\n")?;

    let err = run_with(&settings_for(&input, &output)).unwrap_err();

    assert!(matches!(
        err.downcast_ref::<ChartError>(),
        Some(ChartError::Schema { .. })
    ));
    assert!(!output.exists());
    Ok(())
}

#[test]
fn test_pipeline_missing_input() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let input = dir.path().join("missing.csv");
    let output = dir.path().join("rehash_rds.png");

    let err = run_with(&settings_for(&input, &output)).unwrap_err();

    assert!(matches!(
        err.downcast_ref::<ChartError>(),
        Some(ChartError::NotFound { .. })
    ));
    assert!(!output.exists());
    Ok(())
}

#[test]
fn test_pipeline_missing_output_directory() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let input = dir.path().join("rehash_sizes.csv");
    let output = dir.path().join("figures").join("rehash_rds.png");
    std::fs::write(&input, CSV)?;

    let err = run_with(&settings_for(&input, &output)).unwrap_err();

    assert!(matches!(
        err.downcast_ref::<ChartError>(),
        Some(ChartError::Write { .. })
    ));
    assert!(!dir.path().join("figures").exists());
    Ok(())
}
