use dyn_list::{List, ListError};

fn main() -> Result<(), ListError> {
    let _ = simple_logger::init_with_level(log::Level::Trace);

    println!("=== dyn_list Examples ===\n");

    example_remove_all()?;
    example_growth()?;

    Ok(())
}

fn example_remove_all() -> Result<(), ListError> {
    println!("Example 1: Removing every value above 10");

    let values = [5, 10, 5, 2, 8, 8, 20, 11, 50, 36, 5, 8, 12];
    let mut list = List::from_sequence(Some(values))?;

    println!("  Before: {list} (len {}, capacity {})", list.len(), list.capacity());
    let removed = list.remove_all(|v| *v > 10);
    println!("  Removed {removed}");
    println!("  After:  {list} (len {}, capacity {})", list.len(), list.capacity());

    list.trim_excess()?;
    println!("  Trimmed capacity: {}", list.capacity());
    println!();

    Ok(())
}

fn example_growth() -> Result<(), ListError> {
    println!("Example 2: Capacity growth on push");

    let mut list = List::new();
    let mut capacity = list.capacity();
    for i in 0..40u32 {
        list.push(i)?;
        if list.capacity() != capacity {
            println!("  len {:>2}: capacity {} -> {}", list.len(), capacity, list.capacity());
            capacity = list.capacity();
        }
    }
    println!();

    Ok(())
}
