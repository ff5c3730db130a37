//! End-to-end snapshot tests for rendered translation units.
//!
//! Each test assembles a full program through the public surface and pins
//! the exact rendered text. Run `cargo insta review` to update snapshots
//! when making intentional changes.

use cquill::{
    CType, FuncDecl, Program, Stat, StructDecl, Switch, Val, Var,
    bindings::{stdio, stdlib, string},
};

#[test]
fn test_hello_world() {
    let out = Program::new()
        .include(stdio::HEADER)
        .stat(stdio::puts().call([Val::str("hello, world")]))
        .build();
    insta::assert_snapshot!(out, @r#"
    #include <stdio.h>
    int main(void)
    {
    puts("hello, world");
    }
    "#);
}

#[test]
fn test_embedded_function_definition() {
    let max = FuncDecl::new("max", CType::int())
        .param("a", CType::int())
        .param("b", CType::int());
    let def = max.define(|p| {
        vec![
            Stat::if_(p[0].gt(&p[1]), vec![Stat::ret(&p[0])]),
            Stat::ret(&p[1]),
        ]
    });
    let out = Program::new()
        .include(stdio::HEADER)
        .embed(&def)
        .stat(stdio::printf().call([Val::str("%d\\n"), max.call([3, 5])]))
        .build();
    insta::assert_snapshot!(out, @r#"
    #include <stdio.h>
    int max(int a,int b)
    {
    if(a>b)
    {
    return a;
    }
    return b;
    }
    int main(void)
    {
    printf("%d\n",max(3,5));
    }
    "#);
}

#[test]
fn test_struct_designated_initializer() {
    let point = StructDecl::new("point")
        .member("x", CType::float())
        .member("y", CType::float());
    let p = point.var("p");
    let out = Program::new()
        .include(stdio::HEADER)
        .embed(&point)
        .stat(point.init_designated("p", [("x", Val::float(1.5)), ("y", Val::float(2.5))]))
        .stat(stdio::printf().call([Val::str("%f"), p.dot("x")]))
        .stat(Stat::ret(0))
        .build();
    insta::assert_snapshot!(out, @r#"
    #include <stdio.h>
    struct point
    {
    float x;
    float y;
    };
    int main(void)
    {
    struct point p={.x=1.5F,.y=2.5F};
    printf("%f",p.x);
    return 0;
    }
    "#);
}

#[test]
fn test_heap_allocation_loop() {
    let xs = Var::new("xs", CType::pointer(CType::int()));
    let i = Val::name("i", CType::int());
    let alloc = stdlib::malloc()
        .call([Val::size_of_ty(CType::int()).mul(10)])
        .cast(xs.ty().clone());
    let out = Program::new()
        .include(stdlib::HEADER)
        .stat(xs.init(alloc))
        .stat(Stat::for_(
            Some(Stat::var_init("i", CType::int(), 0)),
            Some(i.lt(10)),
            Some(i.post_inc()),
            vec![Stat::expr(xs.index(&i).assign(i.mul(&i)))],
        ))
        .stat(Stat::expr(stdlib::free().call([xs.val()])))
        .stat(Stat::ret(0))
        .build();
    insta::assert_snapshot!(out, @r#"
    #include <stdlib.h>
    int main(void)
    {
    int* xs=(int*)malloc(sizeof(int)*10);
    for(int i=0;i<10;i++)
    {
    xs[i]=i*i;
    }
    free(xs);
    return 0;
    }
    "#);
}

#[test]
fn test_switch_on_input() {
    let c = Var::new("c", CType::int());
    let out = Program::new()
        .include(stdio::HEADER)
        .stat(c.init(stdio::getchar().call(Vec::<Val>::new())))
        .stat(
            Switch::new(c.val())
                .case(Val::char_lit('q'), vec![Stat::ret(0)])
                .default(vec![Stat::expr(stdio::putchar().call([c.val()]))])
                .finish(),
        )
        .stat(Stat::ret(1))
        .build();
    insta::assert_snapshot!(out, @r"
    #include <stdio.h>
    int main(void)
    {
    int c=getchar();
    switch(c)
    {
    case 'q':
    return 0;
    default:
    putchar(c);
    }
    return 1;
    }
    ");
}

#[test]
fn test_string_comparison() {
    let name = Var::new("name", CType::array(CType::char_(), 8));
    let out = Program::new()
        .include(string::HEADER)
        .stat(name.init(Val::str("ada")))
        .stat(Stat::if_(
            string::strcmp().call([name.val(), Val::str("ada")]).eq(0),
            vec![Stat::ret(0)],
        ))
        .stat(Stat::ret(1))
        .build();
    insta::assert_snapshot!(out, @r#"
    #include <string.h>
    int main(void)
    {
    char name[8]="ada";
    if(strcmp(name,"ada")==0)
    {
    return 0;
    }
    return 1;
    }
    "#);
}
