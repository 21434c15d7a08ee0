use query_list::collections::linked::List;

fn main() {
    println!("\n[List]\n");

    let mut list = List::from([3, 1, 4, 1, 5, 9, 2, 6]);
    println!("{list}");

    list.add(5);
    list.add_front(0);
    println!("after add/add_front: {list}");

    list.remove_all(|&x| x == 1);
    println!("without the ones:    {list}");

    println!("\n[Queries]\n");

    println!("sorted:    {}", list.order(|a, b| a.cmp(b)));
    println!("distinct:  {}", list.distinct());
    println!("evens:     {}", list.filter(|x| x % 2 == 0));
    println!("doubled:   {}", list.select(|x| x * 2));
    println!("sum:       {}", list.sum(|&x| x));
    println!("average:   {}", list.average(|&x| x as f64));
    println!("max:       {}", list.max(|a, b| a.cmp(b)));

    for (index, chunk) in list.chunk(3).into_iter().enumerate() {
        println!("chunk {index}:   {chunk}");
    }

    let names = List::from([(1, "one"), (2, "two"), (42, "many")]);
    let spelled = list.join(&names, |&x| x, |n| n.0, |_, n| n.1);
    println!("spelled:   {spelled}");
}
