#[derive(Clone, Debug)]
pub struct Student {
    pub name: String,
    pub gpa: f64,
    pub notebooks: u32,
    pub activities: Vec<String>,
    pub bike: Option<Bike>,
}

#[derive(Clone, Debug)]
pub struct Bike {
    pub model: Option<String>,
}

impl Student {
    /// Model of the student's bike, if a bike is owned and its model is
    /// known and non-empty.
    pub fn bike_model(&self) -> Option<&str> {
        self.bike
            .as_ref()
            .and_then(|bike| bike.model.as_deref())
            .filter(|model| !model.is_empty())
    }

    pub fn activity_count(&self) -> usize {
        self.activities.len()
    }
}

#[test]
fn test_bike_model() {
    let mut student = Student {
        name: "Jenny".into(),
        gpa: 3.8,
        notebooks: 3,
        activities: vec!["swimming".into()],
        bike: None,
    };
    assert_eq!(student.bike_model(), None);
    student.bike = Some(Bike { model: None });
    assert_eq!(student.bike_model(), None);
    student.bike = Some(Bike {
        model: Some(String::new()),
    });
    assert_eq!(student.bike_model(), None);
    student.bike = Some(Bike {
        model: Some("BMX".into()),
    });
    assert_eq!(student.bike_model(), Some("BMX"));
}
